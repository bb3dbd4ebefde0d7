//! XML wire encoding for problem records
//!
//! This module implements both directions of the problem record codec on
//! top of a small pull reader and writer:
//!
//! - [`name`]: reversible key ↔ element-name transform
//! - [`reader`] / [`writer`]: the markup primitives the codec needs
//! - `encode` / `decode`: the record write and read paths

mod decode;
mod encode;
mod error;
pub mod name;
mod options;
pub mod reader;
pub mod writer;

pub use decode::{decode_problem, decode_problem_bytes, read_problem};
pub use encode::{encode_problem, write_problem};
pub use error::{DecodeError, XmlError};
pub use name::{
    decode_key, decode_name, encode_key, encode_name, is_valid_name, DEFAULT_EMPTY_KEY_SENTINEL,
};
pub use options::{CheckedOptions, CodecOptions, ConfigError, PROBLEM_NAMESPACE};
pub use reader::{StartTag, XmlEvent, XmlReader};
pub use writer::XmlWriter;
