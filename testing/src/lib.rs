//! # Async Actions Testing
//!
//! Testing utilities and fixtures for the async-actions crates.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for action creators ([`CreatorTest`])
//! - Canonical endpoint fixtures shared by unit and integration tests
//!
//! ## Example
//!
//! ```
//! use async_actions_testing::{CreatorTest, fixtures};
//! use async_actions_core::{api_creator::ApiActionCreatorFactory, endpoint::EndpointConfig, params};
//!
//! CreatorTest::new(ApiActionCreatorFactory)
//!     .with_prefix(fixtures::PREFIX)
//!     .given_endpoint("read", EndpointConfig::new("endpoint/:id", "put"))
//!     .when_called("read", params! { "id" => "123" })
//!     .then_meta(|meta| assert_eq!(meta["url"], "endpoint/123"))
//!     .run();
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use creator_test::CreatorTest;
