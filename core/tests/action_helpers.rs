//! End-to-end tests for the action-helper pipeline
//!
//! Exercises the full flow: endpoint configs + prefix → action types →
//! creators (through the reference factory) → action descriptors, plus the
//! flattened type lookup. Fixtures live in the testing crate so unit tests
//! bind to the same contract.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use async_actions_core::api_creator::ApiActionCreatorFactory;
use async_actions_core::creator::create_creators;
use async_actions_core::endpoint::EndpointConfig;
use async_actions_core::options::parse_options;
use async_actions_core::params;
use async_actions_core::types::{TypeRegistryError, create_types, reduce_action_types};
use async_actions_testing::fixtures::{self, PREFIX};
use std::borrow::Cow;

// ============================================================================
// create_types
// ============================================================================

#[test]
fn create_types_returns_the_respective_action_types() {
    let types = create_types(&["list", "softDelete"], PREFIX);

    assert_eq!(types["list"].uppercase_name, "LIST");
    assert_eq!(types["list"].request, "MY_LIST_REQUEST");
    assert_eq!(types["list"].response, "MY_LIST_RESPONSE");

    assert_eq!(types["softDelete"].uppercase_name, "SOFT_DELETE");
    assert_eq!(types["softDelete"].request, "MY_SOFT_DELETE_REQUEST");
    assert_eq!(types["softDelete"].response, "MY_SOFT_DELETE_RESPONSE");
}

// ============================================================================
// parse_options
// ============================================================================

#[test]
fn parse_options_applies_the_modifier_or_is_the_identity() {
    let with_modifier =
        EndpointConfig::new("endpoint", "get").with_modifier(|_| params! { "a" => "1" });
    let plain = EndpointConfig::new("endpoint", "get");
    let options = params! { "a" => 1 };

    assert_eq!(parse_options(&params! {}, &with_modifier)["a"], "1");
    assert!(matches!(
        parse_options(&options, &plain),
        Cow::Borrowed(p) if std::ptr::eq(p, &options)
    ));
}

// ============================================================================
// create_creators
// ============================================================================

#[test]
fn creators_cover_every_endpoint_shape() {
    let configs = fixtures::base_configs();
    let types = create_types(&fixtures::base_keys(), PREFIX);
    let creators = create_creators(&configs, &types, PREFIX, &ApiActionCreatorFactory).unwrap();

    // Plain template, no params: url and method only.
    let list = creators["list"](&params! {});
    assert_eq!(list.types.as_array(), ["MY_LIST_REQUEST", "MY_LIST_RESPONSE"]);
    assert_eq!(list.meta, params! { "url" => "endpoint", "method" => "get" });

    // URL function: its result and its inputs both land in meta.
    let by_function = creators["listWithUrlFunction"](&params! { "test" => 1232 });
    assert_eq!(
        by_function.types.as_array(),
        [
            "MY_LIST_WITH_URL_FUNCTION_REQUEST",
            "MY_LIST_WITH_URL_FUNCTION_RESPONSE"
        ]
    );
    assert_eq!(
        by_function.meta,
        params! { "url" => "/1232/", "method" => "get", "test" => 1232 }
    );

    // Placeholder template: substituted, params spread into meta.
    let read = creators["read"](&params! { "id" => "123" });
    assert_eq!(read.types.as_array(), ["MY_READ_REQUEST", "MY_READ_RESPONSE"]);
    assert_eq!(
        read.meta,
        params! { "url" => "endpoint/123", "method" => "put", "id" => "123" }
    );

    // Middlewares pass through unmodified.
    let with_extras = creators["readWithExtras"](&params! { "id" => "123" });
    assert_eq!(
        with_extras.types.as_array(),
        ["MY_READ_WITH_EXTRAS_REQUEST", "MY_READ_WITH_EXTRAS_RESPONSE"]
    );
    assert_eq!(
        with_extras.meta,
        params! {
            "url" => "endpoint/123",
            "method" => "put",
            "id" => "123",
            "middlewares" => serde_json::json!(["myMiddleware"]),
        }
    );
}

#[test]
fn creators_are_reusable_and_do_not_mutate_inputs() {
    let configs = fixtures::base_configs();
    let types = create_types(&fixtures::base_keys(), PREFIX);
    let creators = create_creators(&configs, &types, PREFIX, &ApiActionCreatorFactory).unwrap();

    let call_params = params! { "id" => "7" };
    let first = creators["read"](&call_params);
    let second = creators["read"](&call_params);

    assert_eq!(first, second);
    assert_eq!(call_params, params! { "id" => "7" });
}

// ============================================================================
// reduce_action_types
// ============================================================================

#[test]
fn reduce_action_types_re_keys_by_uppercase_name() {
    let types = create_types(&fixtures::base_keys(), PREFIX);
    let flattened = reduce_action_types(&types).unwrap();

    assert_eq!(flattened.len(), 4);
    assert_eq!(flattened["LIST"].request, "MY_LIST_REQUEST");
    assert_eq!(flattened["LIST"].response, "MY_LIST_RESPONSE");
    assert_eq!(
        flattened["LIST_WITH_URL_FUNCTION"].request,
        "MY_LIST_WITH_URL_FUNCTION_REQUEST"
    );
    assert_eq!(flattened["READ"].response, "MY_READ_RESPONSE");
    assert_eq!(
        flattened["READ_WITH_EXTRAS"].request,
        "MY_READ_WITH_EXTRAS_REQUEST"
    );
}

#[test]
fn reduce_action_types_fails_fast_on_collisions() {
    let types = create_types(&["softDelete", "soft_delete"], PREFIX);

    // Both keys collapse to SOFT_DELETE once uppercased.
    assert_eq!(
        reduce_action_types(&types),
        Err(TypeRegistryError::DuplicateConstantName(
            "SOFT_DELETE".to_string()
        ))
    );
}
