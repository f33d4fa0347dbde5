//! Declarative macros for ergonomic params construction
//!
//! Call-time params are plain JSON maps; writing them out with
//! `Map::insert` buries the interesting values in boilerplate. The
//! [`params!`] macro keeps call sites and tests readable.

/// Build a [`Params`](crate::endpoint::Params) map from `key => value` pairs.
///
/// Values can be anything `serde_json::Value` converts from (strings,
/// numbers, booleans, nested values).
///
/// # Example
///
/// ```
/// use async_actions_core::params;
///
/// let empty = params! {};
/// assert!(empty.is_empty());
///
/// let call = params! { "id" => "123", "page" => 2 };
/// assert_eq!(call["id"], "123");
/// assert_eq!(call["page"], 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::endpoint::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::endpoint::Params::new();
        $(
            map.insert(($key).to_string(), ::serde_json::Value::from($value));
        )+
        map
    }};
}
