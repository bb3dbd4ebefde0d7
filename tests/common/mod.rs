//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use problemdoc::wire::DEFAULT_EMPTY_KEY_SENTINEL;
use problemdoc::{ExtensionValue, Extensions, ProblemCodec, ProblemRecord, WellKnownField};
use proptest::prelude::*;

/// Install a test-writer subscriber so codec diagnostics show up in failures.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Codec with no declaration and no namespace, for exact-output assertions.
pub fn bare_codec() -> ProblemCodec {
    ProblemCodec::builder()
        .no_declaration()
        .no_namespace()
        .build()
        .unwrap()
}

/// The record a decoder yields for `record`: extension values become text.
pub fn as_decoded(record: &ProblemRecord) -> ProblemRecord {
    let mut extensions = Extensions::new();
    for (key, value) in record.extensions.iter() {
        extensions.insert(key, value.to_decoded()).unwrap();
    }
    ProblemRecord {
        extensions,
        ..record.clone()
    }
}

/// Record from the RFC 7807 example, plus a trace id.
pub fn sample_record() -> ProblemRecord {
    ProblemRecord::new()
        .with_type("https://example.com/probs/out-of-credit")
        .with_title("You do not have enough credit.")
        .with_status(403)
        .with_detail("Your current balance is 30, but that costs 50.")
        .with_instance("/account/12345/msgs/abc")
        .with_extension("traceId", "abc-123")
        .unwrap()
}

// ============================================================================
// Strategies
// ============================================================================

pub fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(DEFAULT_EMPTY_KEY_SENTINEL.to_string()),
        Just("key".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_.-]{0,12}",
        "[_x0-9A-F: ]{1,10}",
        any::<String>(),
    ]
    .prop_filter("well-known names are not extension keys", |k| {
        !WellKnownField::is_reserved(k)
    })
}

pub fn arb_text_value() -> impl Strategy<Value = ExtensionValue> {
    any::<String>().prop_map(ExtensionValue::Text)
}

pub fn arb_scalar_value() -> impl Strategy<Value = ExtensionValue> {
    prop_oneof![
        any::<String>().prop_map(ExtensionValue::Text),
        any::<i64>().prop_map(ExtensionValue::Integer),
        (-1.0e12..1.0e12f64).prop_map(ExtensionValue::Float),
        any::<bool>().prop_map(ExtensionValue::Bool),
        Just(ExtensionValue::Null),
    ]
}

pub fn arb_record<S>(values: S) -> impl Strategy<Value = ProblemRecord>
where
    S: Strategy<Value = ExtensionValue>,
{
    (
        proptest::option::of(any::<String>()),
        proptest::option::of(any::<String>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<String>()),
        proptest::option::of(any::<String>()),
        proptest::collection::vec((arb_key(), values), 0..8),
    )
        .prop_map(|(problem_type, title, status, detail, instance, pairs)| {
            ProblemRecord {
                problem_type,
                title,
                status,
                detail,
                instance,
                extensions: Extensions::from_pairs(pairs).unwrap(),
            }
        })
}
