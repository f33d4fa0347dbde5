//! # Async Actions Core
//!
//! Configuration-to-object transformer for Redux-style asynchronous actions.
//!
//! Given a mapping of named endpoints (URL template or function, HTTP
//! method, optional middleware list) and a naming prefix, this crate
//! produces:
//!
//! - per-endpoint `REQUEST`/`RESPONSE` action-type identifiers,
//! - callable action creators that build action descriptors (type pair +
//!   metadata) from call-time params, and
//! - a flattened lookup of all action types keyed by uppercase constant
//!   name, for reducer wiring.
//!
//! The crate only *describes* actions. HTTP transport, dispatch, store
//! wiring, and middleware execution are external collaborators; the one
//! seam to them is the [`ActionCreatorFactory`] trait, injected explicitly
//! into [`create_creators`].
//!
//! # Data flow
//!
//! ```text
//! configs + prefix
//!        │
//!        ▼
//!  create_types ──► TypeDescriptor map ──┬──► create_creators (+ factory)
//!                                        │
//!                                        └──► reduce_action_types
//! ```
//!
//! # Example
//!
//! ```
//! use async_actions_core::{
//!     api_creator::ApiActionCreatorFactory,
//!     creator::create_creators,
//!     endpoint::EndpointConfig,
//!     params,
//!     types::create_types,
//! };
//! use std::collections::HashMap;
//!
//! let configs = HashMap::from([
//!     ("read".to_string(), EndpointConfig::new("endpoint/:id", "put")),
//! ]);
//! let types = create_types(&["read"], "MY");
//! let creators =
//!     create_creators(&configs, &types, "MY", &ApiActionCreatorFactory)?;
//!
//! let action = creators["read"](&params! { "id" => "123" });
//! assert_eq!(action.types.request, "MY_READ_REQUEST");
//! assert_eq!(action.meta["url"], "endpoint/123");
//! # Ok::<(), async_actions_core::creator::CreatorError>(())
//! ```
//!
//! # Design principles
//!
//! - Pure, synchronous, stateless functions; nothing mutates its inputs.
//! - Explicit capability injection (no global default factory).
//! - No validation layer: panics from caller-supplied closures propagate.

pub mod api_creator;
pub mod creator;
pub mod endpoint;
pub mod naming;
pub mod options;
pub mod param_macros;
pub mod types;

// Re-export commonly used types
pub use api_creator::ApiActionCreatorFactory;
pub use creator::{
    ActionCreator, ActionCreatorFactory, ActionDescriptor, CreatorError, create_creators,
};
pub use endpoint::{EndpointConfig, Meta, Middlewares, Modifier, Params, Url};
pub use naming::constant_case;
pub use options::parse_options;
pub use smallvec::{SmallVec, smallvec};
pub use types::{TypeDescriptor, TypePair, TypeRegistryError, create_types, reduce_action_types};
