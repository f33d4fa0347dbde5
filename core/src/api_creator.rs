//! Reference action-creator factory for API endpoints.
//!
//! [`ApiActionCreatorFactory`] is the stock implementation of
//! [`ActionCreatorFactory`]: the creators it builds resolve the endpoint
//! URL, run the options modifier, and compose the action metadata.
//!
//! # Metadata composition
//!
//! For a call with params `p` against config `c`:
//!
//! 1. `url` — `c.url` as a function is called with `p`; as a template,
//!    `:name` placeholders are substituted from matching keys of `p`.
//!    Unresolved placeholders stay verbatim.
//! 2. The resolved options (`p`, or the modifier's output when `c` has one)
//!    are spread into the metadata.
//! 3. `middlewares` joins only when configured, unmodified.
//!
//! So `endpoint/:id` called with `{id: "123"}` yields
//! `{url: "endpoint/123", method, id: "123"}`, and a URL function's inputs
//! double as metadata alongside its result.

use crate::creator::{ActionCreator, ActionCreatorFactory, ActionDescriptor};
use crate::endpoint::{EndpointConfig, Meta, Params, Url};
use crate::options::parse_options;
use crate::types::TypePair;

/// The stock [`ActionCreatorFactory`] for HTTP API endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiActionCreatorFactory;

impl ActionCreatorFactory for ApiActionCreatorFactory {
    fn make_creator(&self, types: TypePair, config: EndpointConfig) -> ActionCreator {
        Box::new(move |params| ActionDescriptor {
            types: types.clone(),
            meta: compose_meta(&config, params),
        })
    }
}

/// Resolve the URL and build the full metadata map for one call.
fn compose_meta(config: &EndpointConfig, params: &Params) -> Meta {
    let url = match &config.url {
        Url::Template(template) => substitute_placeholders(template, params),
        Url::Function(f) => f.as_ref()(params),
    };

    let mut meta = Meta::new();
    meta.insert("url".to_string(), url.into());
    meta.insert("method".to_string(), config.method.clone().into());
    for (key, value) in parse_options(params, config).iter() {
        meta.insert(key.clone(), value.clone());
    }
    if let Some(middlewares) = &config.middlewares {
        meta.insert(
            "middlewares".to_string(),
            middlewares
                .iter()
                .map(|m| serde_json::Value::from(m.clone()))
                .collect::<Vec<_>>()
                .into(),
        );
    }
    meta
}

/// Substitute `:name` placeholders in a URL template from params.
///
/// A placeholder is a `:` followed by a run of identifier characters.
/// Placeholders with no matching param key are left as-is; no validation.
fn substitute_placeholders(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(after.len());
        let name = &after[..end];
        match params.get(name) {
            Some(value) if !name.is_empty() => out.push_str(&value_as_segment(value)),
            _ => {
                out.push(':');
                out.push_str(name);
            }
        }
        rest = &after[end..];
    }
    out.push_str(rest);
    out
}

/// Render a param value as a path segment: strings verbatim, everything
/// else in its JSON display form.
fn value_as_segment(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
