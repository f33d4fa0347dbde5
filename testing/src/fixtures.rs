//! Canonical endpoint fixtures shared across the test suites.
//!
//! One endpoint per interesting shape: a plain template, a URL function, a
//! template with a placeholder, and a placeholder endpoint with middleware.
//! Unit tests and integration tests bind to these exact configs so the two
//! suites exercise the same contract.

use async_actions_core::endpoint::{EndpointConfig, Params, Url};
use std::collections::HashMap;

/// The action-type prefix used by every fixture.
pub const PREFIX: &str = "MY";

/// The URL function used by the `listWithUrlFunction` fixture:
/// `{test: 1232}` → `/1232/`.
#[must_use]
pub fn url_function(params: &Params) -> String {
    match params.get("test") {
        Some(serde_json::Value::String(s)) => format!("/{s}/"),
        Some(other) => format!("/{other}/"),
        None => "//".to_string(),
    }
}

/// The endpoint keys of [`base_configs`], in declaration order.
#[must_use]
pub fn base_keys() -> Vec<&'static str> {
    vec!["list", "listWithUrlFunction", "read", "readWithExtras"]
}

/// The canonical endpoint set: one config per interesting shape.
#[must_use]
pub fn base_configs() -> HashMap<String, EndpointConfig> {
    HashMap::from([
        (
            "list".to_string(),
            EndpointConfig::new("endpoint", "get"),
        ),
        (
            "listWithUrlFunction".to_string(),
            EndpointConfig::new(Url::function(url_function), "get"),
        ),
        (
            "read".to_string(),
            EndpointConfig::new("endpoint/:id", "put"),
        ),
        (
            "readWithExtras".to_string(),
            EndpointConfig::new("endpoint/:id", "put").with_middlewares(["myMiddleware"]),
        ),
    ])
}
