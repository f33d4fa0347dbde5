//! Per-endpoint resolution of call-time options.
//!
//! An endpoint may carry a modifier function that recomputes the options an
//! action creator was called with before they join the action metadata. The
//! modifier's output is the *entire* contribution: it replaces the derived
//! fields rather than being merged over them. Endpoints without a modifier
//! pass the options through untouched.

use crate::endpoint::{EndpointConfig, Params};
use std::borrow::Cow;

/// Resolve call-time options against an endpoint's modifier.
///
/// With a modifier configured, returns exactly `modifier(options)` as an
/// owned map; the caller's own fields only survive if the modifier carries
/// them over. Without one, returns the input borrowed — same allocation, no
/// copy.
///
/// A panicking modifier propagates unchanged; the core installs no recovery
/// layer.
///
/// # Examples
///
/// ```
/// use async_actions_core::{params, options::parse_options};
/// use async_actions_core::endpoint::EndpointConfig;
/// use std::borrow::Cow;
///
/// let plain = EndpointConfig::new("endpoint", "get");
/// let options = params! { "a" => 1 };
/// assert!(matches!(parse_options(&options, &plain), Cow::Borrowed(_)));
///
/// let modified = EndpointConfig::new("endpoint", "get")
///     .with_modifier(|_| params! { "a" => "1" });
/// assert_eq!(parse_options(&options, &modified)["a"], "1");
/// ```
#[must_use]
pub fn parse_options<'a>(options: &'a Params, config: &EndpointConfig) -> Cow<'a, Params> {
    match config.modifier.as_deref() {
        Some(modifier) => Cow::Owned(modifier(options)),
        None => Cow::Borrowed(options),
    }
}
