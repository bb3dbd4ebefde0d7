//! Decoding hand-written documents and inspecting encoded output.

use crate::common::*;
use problemdoc::wire::XmlError;
use problemdoc::{Error, ExtensionValue, ProblemCodec, ProblemRecord};

fn text(s: &str) -> ExtensionValue {
    ExtensionValue::Text(s.to_string())
}

// === Empty-key sentinel ===

#[test]
fn test_empty_key_written_as_sentinel() {
    let codec = bare_codec();
    let record = ProblemRecord::new()
        .with_extension("", "value-for-empty-key")
        .unwrap();

    let xml = codec.encode(&record);
    assert_eq!(
        xml,
        "<problem><_xEmpty_>value-for-empty-key</_xEmpty_></problem>"
    );

    let decoded = codec.decode(&xml).unwrap();
    assert_eq!(decoded.extensions.get(""), Some(&text("value-for-empty-key")));
}

// === Unknown elements ===

#[test]
fn test_unknown_element_tolerated() {
    init_tracing();
    let record = problemdoc::decode(
        "<problem><title>Not Found</title><traceId>abc-123</traceId></problem>",
    )
    .unwrap();

    assert_eq!(record.extensions.get("traceId"), Some(&text("abc-123")));
    assert_eq!(record.title.as_deref(), Some("Not Found"));
    assert_eq!(record.problem_type, None);
    assert_eq!(record.status, None);
    assert_eq!(record.detail, None);
    assert_eq!(record.instance, None);
}

// === Absent vs empty ===

#[test]
fn test_empty_title_present() {
    let codec = bare_codec();
    let record = ProblemRecord::new().with_title("");

    let xml = codec.encode(&record);
    assert_eq!(xml, "<problem><title/></problem>");
    assert_eq!(codec.decode(&xml).unwrap().title.as_deref(), Some(""));
}

#[test]
fn test_absent_title_not_written() {
    let codec = bare_codec();
    let record = ProblemRecord::new().with_status(500);

    let xml = codec.encode(&record);
    assert!(!xml.contains("title"));
    assert_eq!(codec.decode(&xml).unwrap().title, None);
}

// === Status ===

#[test]
fn test_status_parse_failure() {
    let err = problemdoc::decode("<problem><status>abc</status></problem>").unwrap_err();
    assert!(err.is_malformed_status());
    assert!(matches!(err, Error::MalformedStatus(ref t) if t == "abc"));
}

#[test]
fn test_status_failure_discards_partial_record() {
    let result =
        problemdoc::decode("<problem><title>t</title><status>4o4</status><detail>d</detail></problem>");
    assert!(result.is_err());
}

#[test]
fn test_status_written_as_decimal() {
    let xml = bare_codec().encode(&ProblemRecord::new().with_status(-1));
    assert_eq!(xml, "<problem><status>-1</status></problem>");
}

// === Duplicates ===

#[test]
fn test_duplicate_extension_last_wins() {
    let record = problemdoc::decode(
        "<problem><traceId>first</traceId><traceId>second</traceId></problem>",
    )
    .unwrap();
    assert_eq!(record.extensions.get("traceId"), Some(&text("second")));
}

// === Empty root ===

#[test]
fn test_empty_root() {
    for doc in ["<problem/>", "<problem></problem>", "<problem>\n  \n</problem>"] {
        let record = problemdoc::decode(doc).unwrap();
        assert_eq!(record, ProblemRecord::new());
        assert!(record.extensions.is_empty());
    }
}

// === Document shape ===

#[test]
fn test_overview_document() {
    let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<problem xmlns="urn:ietf:rfc:7807">
  <detail>Something went wrong</detail>
  <status>404</status>
  <title>Not Found</title>
  <_xEmpty_>value-for-empty-key</_xEmpty_>
  <traceId>abc-123</traceId>
</problem>
"#;

    let record = problemdoc::decode(doc).unwrap();
    let expected = ProblemRecord::new()
        .with_detail("Something went wrong")
        .with_status(404)
        .with_title("Not Found")
        .with_extension("", "value-for-empty-key")
        .unwrap()
        .with_extension("traceId", "abc-123")
        .unwrap();
    assert_eq!(record, expected);
}

#[test]
fn test_pretty_encoding() {
    let codec = ProblemCodec::builder().pretty().build().unwrap();
    let record = ProblemRecord::new()
        .with_title("Not Found")
        .with_status(404)
        .with_extension("traceId", "abc-123")
        .unwrap();

    assert_eq!(
        codec.encode(&record),
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <problem xmlns=\"urn:ietf:rfc:7807\">\n\
         \x20 <title>Not Found</title>\n\
         \x20 <status>404</status>\n\
         \x20 <traceId>abc-123</traceId>\n\
         </problem>\n"
    );
}

// === Malformed documents ===

#[test]
fn test_malformed_documents() {
    let cases = [
        "",
        "<problem>",
        "<problem><title>x</problem>",
        "<problem><title>&bogus;</title></problem>",
        "<problem/><extra/>",
        "<!DOCTYPE problem><problem/>",
        "not xml at all",
    ];

    for doc in cases {
        let err = problemdoc::decode(doc).unwrap_err();
        assert!(err.is_malformed_document(), "{:?} gave {:?}", doc, err);
    }
}

#[test]
fn test_malformed_document_keeps_parser_error() {
    let err = problemdoc::decode("<problem><title>x</detail></problem>").unwrap_err();
    match err {
        Error::MalformedDocument(XmlError::MismatchedTag {
            expected, found, ..
        }) => {
            assert_eq!(expected, "title");
            assert_eq!(found, "detail");
        }
        other => panic!("Expected MismatchedTag, got {:?}", other),
    }
}
