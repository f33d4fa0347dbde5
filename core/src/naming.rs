//! Endpoint key to action-type constant name conversion.
//!
//! Endpoint keys are written in camelCase (`softDelete`, `listWithUrlFunction`)
//! while action-type constants follow the Redux convention of uppercase,
//! underscore-separated tokens (`SOFT_DELETE`, `LIST_WITH_URL_FUNCTION`).
//! [`constant_case`] is the single conversion point; everything in
//! [`crate::types`] builds on it.

/// Convert a camelCase endpoint key into its constant-case form.
///
/// Splits on lowercase-to-uppercase boundaries, separates the words with
/// underscores, and uppercases the result. Input that is already constant
/// case passes through unchanged, so the function is idempotent.
///
/// # Examples
///
/// ```
/// use async_actions_core::naming::constant_case;
///
/// assert_eq!(constant_case("softDelete"), "SOFT_DELETE");
/// assert_eq!(constant_case("listWithUrlFunction"), "LIST_WITH_URL_FUNCTION");
/// assert_eq!(constant_case("SOFT_DELETE"), "SOFT_DELETE");
/// ```
#[must_use]
pub fn constant_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_is_lower = false;
    for ch in key.chars() {
        if ch.is_uppercase() && prev_is_lower {
            out.push('_');
        }
        // Only a lowercase-to-uppercase boundary starts a new word;
        // digits stay attached to the word they follow.
        prev_is_lower = ch.is_lowercase();
        out.extend(ch.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_camel_case_keys() {
        assert_eq!(constant_case("list"), "LIST");
        assert_eq!(constant_case("softDelete"), "SOFT_DELETE");
        assert_eq!(constant_case("readWithExtras"), "READ_WITH_EXTRAS");
    }

    #[test]
    fn splits_every_camel_boundary() {
        assert_eq!(
            constant_case("listWithUrlFunction"),
            "LIST_WITH_URL_FUNCTION"
        );
    }

    #[test]
    fn leaves_constant_case_untouched() {
        assert_eq!(constant_case("SOFT_DELETE"), "SOFT_DELETE");
        assert_eq!(constant_case("LIST"), "LIST");
    }

    #[test]
    fn digits_do_not_start_a_new_word() {
        assert_eq!(constant_case("listV2Items"), "LIST_V2ITEMS");
        assert_eq!(constant_case("page2"), "PAGE2");
    }

    proptest! {
        #[test]
        fn idempotent_for_any_camel_case_key(key in "[a-z][a-zA-Z0-9]{0,24}") {
            let once = constant_case(&key);
            prop_assert_eq!(constant_case(&once), once.clone());
        }

        #[test]
        fn output_is_uppercase_and_underscores(key in "[a-z][a-zA-Z0-9]{0,24}") {
            let out = constant_case(&key);
            prop_assert!(out.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }
}
