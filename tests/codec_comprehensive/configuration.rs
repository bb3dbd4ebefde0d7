//! Options, presets and the empty-key sentinel.

use crate::common::*;
use problemdoc::{CodecOptions, ConfigError, Error, ExtensionValue, ProblemCodec, ProblemRecord};

#[test]
fn test_default_sentinel_does_not_collide() {
    let codec = ProblemCodec::default();
    let record = ProblemRecord::new()
        .with_extension("", "empty")
        .unwrap()
        .with_extension("_xEmpty_", "literal")
        .unwrap();

    let decoded = codec.decode(&codec.encode(&record)).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(decoded.extensions.len(), 2);
}

#[test]
fn test_custom_sentinel_collision_is_lossy() {
    // With a sentinel the name transform can produce, the real key "key"
    // and the empty key share one element name.
    let codec = ProblemCodec::builder()
        .empty_key_sentinel("key")
        .build()
        .unwrap();
    let record = ProblemRecord::new().with_extension("key", "real").unwrap();

    let decoded = codec.decode(&codec.encode(&record)).unwrap();
    assert_eq!(decoded.extensions.get("key"), None);
    assert_eq!(
        decoded.extensions.get(""),
        Some(&ExtensionValue::Text("real".to_string()))
    );
}

#[test]
fn test_custom_sentinel_round_trips_empty_key() {
    let codec = ProblemCodec::builder()
        .empty_key_sentinel("key")
        .no_declaration()
        .no_namespace()
        .build()
        .unwrap();
    let record = ProblemRecord::new().with_extension("", "v").unwrap();

    let xml = codec.encode(&record);
    assert_eq!(xml, "<problem><key>v</key></problem>");
    assert_eq!(codec.decode(&xml).unwrap(), record);
}

#[test]
fn test_strict_root() {
    let strict = ProblemCodec::builder().strict().build().unwrap();
    assert!(strict.decode("<problem/>").is_ok());
    assert!(strict.decode("<p:problem xmlns:p='urn:ietf:rfc:7807'/>").is_ok());

    let err = strict.decode("<ProblemDetails/>").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedRoot { ref expected, ref found }
            if expected == "problem" && found == "ProblemDetails"
    ));
}

#[test]
fn test_lenient_root_accepts_other_names() {
    let record = ProblemCodec::default()
        .decode("<ProblemDetails><status>401</status></ProblemDetails>")
        .unwrap();
    assert_eq!(record.status, Some(401));
}

#[test]
fn test_custom_root_and_namespace() {
    let codec = ProblemCodec::builder()
        .root_name("error")
        .namespace("urn:example:errors")
        .no_declaration()
        .build()
        .unwrap();

    let xml = codec.encode(&ProblemRecord::new());
    assert_eq!(xml, r#"<error xmlns="urn:example:errors"/>"#);
}

#[test]
fn test_invalid_options_rejected() {
    let cases = [
        (
            CodecOptions::default().with_root_name(""),
            ConfigError::InvalidRootName(String::new()),
        ),
        (
            CodecOptions::default().with_empty_key_sentinel("has space"),
            ConfigError::InvalidSentinel("has space".to_string()),
        ),
        (
            CodecOptions::default().with_empty_key_sentinel("instance"),
            ConfigError::ReservedSentinel("instance".to_string()),
        ),
    ];

    for (options, expected) in cases {
        match ProblemCodec::new(options) {
            Err(Error::Config(err)) => assert_eq!(err, expected),
            other => panic!("Expected config error, got {:?}", other),
        }
    }
}

#[test]
fn test_bare_codec_has_no_header() {
    let xml = bare_codec().encode(&ProblemRecord::new());
    assert_eq!(xml, "<problem/>");
}
