//! # problemdoc
//!
//! Round-trip XML codec for problem records.
//!
//! A problem record carries five optional well-known fields (`type`, `title`,
//! `status`, `detail`, `instance`) and any number of caller-defined extension
//! members. problemdoc maps records to XML documents and back without loss:
//! extension keys that are not valid element names are escaped reversibly,
//! and the empty key is written under a reserved sentinel name.
//!
//! ## Quick Start
//!
//! ```
//! use problemdoc::prelude::*;
//!
//! let record = ProblemRecord::new()
//!     .with_title("Not Found")
//!     .with_status(404)
//!     .with_extension("traceId", "abc-123")
//!     .unwrap();
//!
//! let xml = problemdoc::encode(&record);
//! let decoded = problemdoc::decode(&xml).unwrap();
//! assert_eq!(decoded, record);
//! ```
//!
//! ## Layers
//!
//! - [`ProblemRecord`] and friends come from `problemdoc-core`
//! - the name transform, XML reader/writer and both codec paths live in
//!   `problemdoc-wire`, re-exported here as [`wire`]
//! - [`ProblemCodec`] ties validated [`CodecOptions`] to both directions

#![warn(missing_docs)]

mod codec;
mod error;

pub mod prelude;

// Re-export main entry points
pub use codec::{ProblemCodec, ProblemCodecBuilder};
pub use error::{Error, Result};

// Re-export the record model
pub use problemdoc_core::{
    ExtensionValue, Extensions, ModelError, ProblemRecord, WellKnownField, WELL_KNOWN_FIELDS,
};

// Re-export configuration and the wire layer
pub use problemdoc_wire as wire;
pub use problemdoc_wire::{CheckedOptions, CodecOptions, ConfigError, DEFAULT_EMPTY_KEY_SENTINEL};

/// Media type of XML problem documents.
pub const PROBLEM_XML_MEDIA_TYPE: &str = "application/problem+xml";

/// Media type of JSON problem documents.
pub const PROBLEM_JSON_MEDIA_TYPE: &str = "application/problem+json";

/// Encode a record with default options.
pub fn encode(record: &ProblemRecord) -> String {
    ProblemCodec::default().encode(record)
}

/// Decode a document with default options.
pub fn decode(document: &str) -> Result<ProblemRecord> {
    ProblemCodec::default().decode(document)
}
