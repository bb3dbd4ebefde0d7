//! Wire encoding for problemdoc
//!
//! This crate reads and writes [`ProblemRecord`]s as XML documents.
//! Element names must be valid XML names, so extension keys pass through a
//! reversible name transform:
//!
//! - `_xHHHH_` / `_xHHHHHHHH_`: escape for a character that is not allowed
//!   at its position in a name (including `:`)
//! - `_x005F_`: escape for a `_` that is followed by `x`
//! - `_xEmpty_`: default sentinel standing in for the empty key
//!
//! ## Document Shape
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <problem xmlns="urn:ietf:rfc:7807">
//!   <title>Not Found</title>
//!   <status>404</status>
//!   <detail>Something went wrong</detail>
//!   <_xEmpty_>value-for-empty-key</_xEmpty_>
//!   <traceId>abc-123</traceId>
//! </problem>
//! ```
//!
//! The codec functions take [`CheckedOptions`], obtained from
//! [`CodecOptions::check`], so invalid root names or sentinels are rejected
//! before anything is written.
//!
//! Well-known fields come first in the order `type, title, status, detail,
//! instance`, followed by extensions in insertion order. Absent fields are
//! not written; empty strings are written as empty elements.
//!
//! ## Examples
//!
//! ```
//! use problemdoc_core::ProblemRecord;
//! use problemdoc_wire::{decode_problem, encode_problem, CodecOptions};
//!
//! let options = CodecOptions::default().check().unwrap();
//! let record = ProblemRecord::new().with_title("Not Found").with_status(404);
//!
//! let xml = encode_problem(&record, &options);
//! assert!(xml.contains("<status>404</status>"));
//!
//! let decoded = decode_problem(&xml, &options).unwrap();
//! assert_eq!(decoded, record);
//! ```
//!
//! [`ProblemRecord`]: problemdoc_core::ProblemRecord

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod xml;

// Re-export main types
pub use xml::{
    decode_key, decode_name, decode_problem, decode_problem_bytes, encode_key, encode_name,
    encode_problem, is_valid_name, read_problem, write_problem, CheckedOptions, CodecOptions,
    ConfigError,
    DecodeError, StartTag, XmlError, XmlEvent, XmlReader, XmlWriter,
    DEFAULT_EMPTY_KEY_SENTINEL, PROBLEM_NAMESPACE,
};
