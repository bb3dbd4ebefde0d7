//! JSON form, I/O streams and shared use across threads.

use crate::common::*;
use problemdoc::{
    ExtensionValue, ProblemCodec, ProblemRecord, PROBLEM_JSON_MEDIA_TYPE, PROBLEM_XML_MEDIA_TYPE,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_media_types() {
    assert_eq!(PROBLEM_XML_MEDIA_TYPE, "application/problem+xml");
    assert_eq!(PROBLEM_JSON_MEDIA_TYPE, "application/problem+json");
}

#[test]
fn test_json_to_xml_to_json() {
    let json = r#"{
        "type": "https://example.com/probs/out-of-credit",
        "title": "You do not have enough credit.",
        "status": 403,
        "balance": 30,
        "accounts": "/account/12345",
        "": "empty key"
    }"#;

    let record: ProblemRecord = serde_json::from_str(json).unwrap();
    let codec = ProblemCodec::default();
    let decoded = codec.decode(&codec.encode(&record)).unwrap();

    assert_eq!(decoded, as_decoded(&record));
    assert_eq!(
        decoded.extensions.get("balance"),
        Some(&ExtensionValue::Text("30".to_string()))
    );

    let back = serde_json::to_value(&decoded).unwrap();
    assert_eq!(back["status"], 403);
    assert_eq!(back["balance"], "30");
    assert_eq!(back[""], "empty key");
}

#[test]
fn test_stream_round_trip() {
    let codec = ProblemCodec::default();
    let record = sample_record();

    let mut buf = Vec::new();
    codec.write_to(&record, &mut buf).unwrap();
    assert!(buf.starts_with(b"<?xml"));

    let decoded = codec.read_from(std::io::Cursor::new(buf)).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_decode_slice_with_bom() {
    let mut bytes = "\u{FEFF}".as_bytes().to_vec();
    bytes.extend_from_slice(b"<problem><status>429</status></problem>");
    let record = ProblemCodec::default().decode_slice(&bytes).unwrap();
    assert_eq!(record.status, Some(429));
}

#[test]
fn test_codec_shared_across_threads() {
    let codec = Arc::new(ProblemCodec::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                for j in 0..100 {
                    let record = ProblemRecord::new()
                        .with_status(400 + i)
                        .with_extension(format!("worker{}", i), j)
                        .unwrap();
                    let decoded = codec.decode(&codec.encode(&record)).unwrap();
                    assert_eq!(decoded, as_decoded(&record));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_codec_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProblemCodec>();
    assert_send_sync::<ProblemRecord>();
}
