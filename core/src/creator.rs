//! Action creators and the factory seam that produces them.
//!
//! A creator is a callable that turns call-time params into an
//! [`ActionDescriptor`]: the endpoint's `[REQUEST, RESPONSE]` type pair plus
//! composed metadata. This module does not decide *how* a creator behaves;
//! that capability is injected through the [`ActionCreatorFactory`] trait,
//! the same way the rest of the system abstracts its collaborators behind
//! traits. [`create_creators`] only orchestrates: one factory invocation per
//! configured endpoint.
//!
//! The reference factory lives in [`crate::api_creator`]; tests and most
//! callers use it, but anything satisfying the trait plugs in.

use crate::endpoint::{EndpointConfig, Meta, Params};
use crate::types::{TypeDescriptor, TypePair};
use std::collections::HashMap;
use thiserror::Error;

/// Error types for creator construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreatorError {
    /// A configured endpoint has no type descriptor to pair with.
    #[error("No action types for endpoint: {0}")]
    MissingActionTypes(String),
}

/// The runtime output of a creator call: an action type pair plus metadata.
///
/// `meta` always contains at least `url` and `method`; it may carry
/// middleware identifiers and call params. Downstream dispatch consumes it;
/// the core only describes.
// serde_json::Value is not Eq, so the descriptor stops at PartialEq
#[derive(Clone, Debug, PartialEq)]
pub struct ActionDescriptor {
    /// The `[REQUEST, RESPONSE]` pair identifying the action lifecycle.
    pub types: TypePair,

    /// Auxiliary data for downstream dispatch and middleware.
    pub meta: Meta,
}

/// A callable action creator, one per endpoint.
pub type ActionCreator = Box<dyn Fn(&Params) -> ActionDescriptor + Send + Sync>;

/// The injected capability that turns a type pair and an endpoint config
/// into a creator.
///
/// The core never supplies a default: callers pass the factory explicitly,
/// which keeps creator behavior swappable (the reference implementation is
/// [`ApiActionCreatorFactory`](crate::api_creator::ApiActionCreatorFactory),
/// a test double is a one-liner).
pub trait ActionCreatorFactory {
    /// Build the creator for one endpoint.
    fn make_creator(&self, types: TypePair, config: EndpointConfig) -> ActionCreator;
}

/// Build one creator per configured endpoint.
///
/// For every key in `configs`, pairs the endpoint's config with its
/// [`TypeDescriptor`] from `types` and hands both to the factory. The
/// `prefix` is the same one the types were derived under; it identifies the
/// feature in logs.
///
/// # Errors
///
/// Returns [`CreatorError::MissingActionTypes`] when a configured endpoint
/// has no entry in `types`.
pub fn create_creators<F: ActionCreatorFactory>(
    configs: &HashMap<String, EndpointConfig>,
    types: &HashMap<String, TypeDescriptor>,
    prefix: &str,
    factory: &F,
) -> Result<HashMap<String, ActionCreator>, CreatorError> {
    tracing::debug!(prefix, endpoints = configs.len(), "building action creators");
    let mut creators = HashMap::with_capacity(configs.len());
    for (key, config) in configs {
        let descriptor = types
            .get(key)
            .ok_or_else(|| CreatorError::MissingActionTypes(key.clone()))?;
        creators.insert(
            key.clone(),
            factory.make_creator(descriptor.type_pair(), config.clone()),
        );
    }
    Ok(creators)
}
