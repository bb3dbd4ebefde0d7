//! Round-trip properties over generated records.

use crate::common::*;
use problemdoc::{CodecOptions, ProblemCodec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_text_records_round_trip_exactly(record in arb_record(arb_text_value())) {
        let codec = ProblemCodec::default();
        let xml = codec.encode(&record);
        prop_assert_eq!(codec.decode(&xml).unwrap(), record);
    }

    #[test]
    fn prop_scalar_records_round_trip_as_text(record in arb_record(arb_scalar_value())) {
        let codec = ProblemCodec::default();
        let xml = codec.encode(&record);
        prop_assert_eq!(codec.decode(&xml).unwrap(), as_decoded(&record));
    }

    #[test]
    fn prop_pretty_output_round_trips(record in arb_record(arb_text_value())) {
        let codec = ProblemCodec::new(CodecOptions::pretty()).unwrap();
        let xml = codec.encode(&record);
        prop_assert_eq!(codec.decode(&xml).unwrap(), record);
    }

    #[test]
    fn prop_encoding_is_deterministic(record in arb_record(arb_scalar_value())) {
        let codec = ProblemCodec::default();
        prop_assert_eq!(codec.encode(&record), codec.encode(&record.clone()));
    }

    #[test]
    fn prop_reencoding_decoded_record_is_stable(record in arb_record(arb_text_value())) {
        let codec = ProblemCodec::default();
        let xml = codec.encode(&record);
        let again = codec.encode(&codec.decode(&xml).unwrap());
        prop_assert_eq!(again, xml);
    }
}

#[test]
fn test_round_trip_sample() {
    init_tracing();
    let codec = ProblemCodec::default();
    let record = sample_record();
    assert_eq!(codec.decode(&codec.encode(&record)).unwrap(), record);
}

#[test]
fn test_round_trip_hostile_keys() {
    let codec = ProblemCodec::default();
    let keys = [
        "",
        "_xEmpty_",
        "_x",
        "_x0020_",
        "__x",
        "a:b",
        "1",
        " ",
        "\u{0}",
        "\u{F0000}",
        "Ünïcödé key",
        "<&>",
    ];

    let mut record = problemdoc::ProblemRecord::new();
    for (i, key) in keys.iter().enumerate() {
        record.extensions.insert(*key, format!("value-{}", i)).unwrap();
    }

    let decoded = codec.decode(&codec.encode(&record)).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(decoded.extensions.keys().collect::<Vec<_>>(), keys.to_vec());
}

#[test]
fn test_round_trip_hostile_values() {
    let codec = ProblemCodec::default();
    let record = problemdoc::ProblemRecord::new()
        .with_title("  padded  ")
        .with_detail("line one\r\nline two\rline three\n")
        .with_instance("]]><!-- not a comment -->&amp;")
        .with_extension("control", "\u{1}\u{0}\u{FFFE}")
        .unwrap()
        .with_extension("ws", "\t\n ")
        .unwrap();

    assert_eq!(codec.decode(&codec.encode(&record)).unwrap(), record);
}
