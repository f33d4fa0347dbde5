//! Action-type descriptors and the builders that derive them.
//!
//! Every endpoint gets a `REQUEST`/`RESPONSE` pair of action-type strings,
//! derived deterministically from the endpoint key and a feature prefix:
//! `read` under prefix `MY` becomes `MY_READ_REQUEST` / `MY_READ_RESPONSE`.
//!
//! Two shapes of the same information exist:
//!
//! - [`create_types`] keys descriptors by the original endpoint key, which is
//!   what creator wiring wants.
//! - [`reduce_action_types`] re-keys them by the uppercase constant name for
//!   global lookup (reducer wiring), keeping only the type pair.
//!
//! # Example
//!
//! ```
//! use async_actions_core::types::create_types;
//!
//! let types = create_types(&["list", "softDelete"], "MY");
//! assert_eq!(types["softDelete"].request, "MY_SOFT_DELETE_REQUEST");
//! assert_eq!(types["softDelete"].uppercase_name, "SOFT_DELETE");
//! ```

use crate::naming::constant_case;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Error types for the action-type registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeRegistryError {
    /// Two distinct endpoint keys mapped to the same uppercase constant name.
    #[error("Duplicate action-type constant name: {0}")]
    DuplicateConstantName(String),
}

/// The ordered `[REQUEST, RESPONSE]` action-type pair of one endpoint.
///
/// The pair identifies the lifecycle of an asynchronous action: the request
/// type is dispatched when the call starts, the response type when it
/// settles. Downstream dispatch decides what to do with each half; this
/// crate only names them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypePair {
    /// Action type dispatched when the async call starts.
    pub request: String,

    /// Action type dispatched when the async call settles.
    pub response: String,
}

impl TypePair {
    /// Create a new type pair.
    #[must_use]
    pub const fn new(request: String, response: String) -> Self {
        Self { request, response }
    }

    /// View the pair as the ordered `[REQUEST, RESPONSE]` array.
    #[must_use]
    pub fn as_array(&self) -> [&str; 2] {
        [&self.request, &self.response]
    }
}

/// The full per-endpoint type descriptor produced by [`create_types`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Constant-case form of the endpoint key (e.g. `SOFT_DELETE`).
    pub uppercase_name: String,

    /// `{PREFIX}_{UPPERCASE_NAME}_REQUEST`.
    pub request: String,

    /// `{PREFIX}_{UPPERCASE_NAME}_RESPONSE`.
    pub response: String,
}

impl TypeDescriptor {
    /// Derive the descriptor for one endpoint key under a prefix.
    ///
    /// Uniquely determined by `(prefix, key)`; callers are responsible for
    /// keys that stay distinct after uppercasing.
    #[must_use]
    pub fn derive(key: &str, prefix: &str) -> Self {
        let uppercase_name = constant_case(key);
        Self {
            request: format!("{prefix}_{uppercase_name}_REQUEST"),
            response: format!("{prefix}_{uppercase_name}_RESPONSE"),
            uppercase_name,
        }
    }

    /// The `[REQUEST, RESPONSE]` pair of this descriptor.
    #[must_use]
    pub fn type_pair(&self) -> TypePair {
        TypePair::new(self.request.clone(), self.response.clone())
    }
}

/// Build one [`TypeDescriptor`] per endpoint key.
///
/// The output holds one entry per input key, keyed by the original
/// (non-uppercased) key. Deterministic; malformed keys are passed through to
/// [`constant_case`] without validation.
///
/// # Examples
///
/// ```
/// use async_actions_core::types::create_types;
///
/// let types = create_types(&["list", "read"], "MY");
/// assert_eq!(types["list"].request, "MY_LIST_REQUEST");
/// assert_eq!(types["read"].response, "MY_READ_RESPONSE");
/// ```
#[must_use]
pub fn create_types(keys: &[&str], prefix: &str) -> HashMap<String, TypeDescriptor> {
    tracing::debug!(prefix, endpoints = keys.len(), "building action types");
    keys.iter()
        .map(|key| ((*key).to_string(), TypeDescriptor::derive(key, prefix)))
        .collect()
}

/// Flatten a descriptor map into a constant-name lookup.
///
/// Re-keys every entry by its `uppercase_name`, dropping the original
/// endpoint key and keeping only the `[REQUEST, RESPONSE]` pair. The result
/// is what reducer wiring matches against.
///
/// # Errors
///
/// Returns [`TypeRegistryError::DuplicateConstantName`] when two endpoint
/// keys collapse to the same uppercase name. A silent overwrite here would
/// leave a reducer wired to the wrong endpoint, so collisions are rejected
/// up front.
pub fn reduce_action_types(
    types: &HashMap<String, TypeDescriptor>,
) -> Result<HashMap<String, TypePair>, TypeRegistryError> {
    let mut flattened = HashMap::with_capacity(types.len());
    for descriptor in types.values() {
        let previous = flattened.insert(descriptor.uppercase_name.clone(), descriptor.type_pair());
        if previous.is_some() {
            return Err(TypeRegistryError::DuplicateConstantName(
                descriptor.uppercase_name.clone(),
            ));
        }
    }
    Ok(flattened)
}
