//! Endpoint configuration types.
//!
//! An endpoint is a named network operation (`list`, `read`, `softDelete`)
//! described by a URL, an HTTP method, an optional ordered middleware list,
//! and an optional options modifier. Configs are immutable inputs: the
//! builders in [`crate::creator`] read them, nothing mutates them.
//!
//! Call-time parameters and action metadata are open-shaped JSON objects
//! ([`Params`] / [`Meta`]); downstream dispatch layers decide what the
//! fields mean.
//!
//! # Example
//!
//! ```
//! use async_actions_core::endpoint::{EndpointConfig, Url};
//!
//! let read = EndpointConfig::new(Url::template("endpoint/:id"), "put");
//! let list = EndpointConfig::new(Url::function(|_| "/all/".to_string()), "get")
//!     .with_middlewares(["auth"]);
//! assert_eq!(list.method, "get");
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Call-time parameters passed to an action creator, and the raw material
/// for URL substitution and metadata composition.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Composed action metadata. Always carries at least `url` and `method`.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// An endpoint-specific function that recomputes call-time options before
/// they are merged into metadata. Its output *replaces* the derived fields
/// rather than extending them; see [`crate::options::parse_options`].
pub type Modifier = Arc<dyn Fn(&Params) -> Params + Send + Sync>;

/// Ordered middleware identifiers attached to an endpoint. Most endpoints
/// carry none or one, so the list is inline-allocated.
pub type Middlewares = SmallVec<[String; 2]>;

/// The URL of an endpoint: either a template string with optional `:name`
/// placeholders, or a function computing the path from call-time params.
#[derive(Clone)]
pub enum Url {
    /// A path template; `:name` segments are substituted from params.
    Template(String),

    /// A function computing the path from the call-time params.
    Function(Arc<dyn Fn(&Params) -> String + Send + Sync>),
}

impl Url {
    /// A template URL (`endpoint/:id`).
    #[must_use]
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// A URL computed from call-time params.
    #[must_use]
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }
}

impl From<&str> for Url {
    fn from(template: &str) -> Self {
        Self::Template(template.to_string())
    }
}

// Manual Debug implementation since the function variant is opaque
impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(t) => f.debug_tuple("Url::Template").field(t).finish(),
            Self::Function(_) => write!(f, "Url::Function(<fn>)"),
        }
    }
}

/// Immutable description of one named endpoint.
#[derive(Clone)]
pub struct EndpointConfig {
    /// Where the call goes.
    pub url: Url,

    /// HTTP method, passed through to metadata verbatim (`"get"`, `"put"`).
    pub method: String,

    /// Ordered middleware identifiers, included in metadata only when set.
    /// The core never executes them.
    pub middlewares: Option<Middlewares>,

    /// Optional options modifier; see [`crate::options::parse_options`].
    pub modifier: Option<Modifier>,
}

impl EndpointConfig {
    /// Create a config with a URL and method and nothing else.
    #[must_use]
    pub fn new(url: impl Into<Url>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            middlewares: None,
            modifier: None,
        }
    }

    /// Attach an ordered middleware list.
    #[must_use]
    pub fn with_middlewares<I, S>(mut self, middlewares: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares = Some(middlewares.into_iter().map(Into::into).collect());
        self
    }

    /// Attach an options modifier.
    #[must_use]
    pub fn with_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(&Params) -> Params + Send + Sync + 'static,
    {
        self.modifier = Some(Arc::new(modifier));
        self
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("middlewares", &self.middlewares)
            .field("modifier", &self.modifier.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
