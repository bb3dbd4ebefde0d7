//! Wire error types

use problemdoc_core::ModelError;
use thiserror::Error;

/// Markup-level errors: the document is not well-formed
///
/// Offsets are byte positions into the document text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum XmlError {
    /// Document ended inside a construct
    #[error("unexpected end of document at byte {offset}")]
    UnexpectedEnd {
        /// Byte offset
        offset: usize,
    },

    /// Character not allowed here
    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset
        offset: usize,
    },

    /// End tag does not close the innermost open element
    #[error("mismatched end tag at byte {offset}: expected </{expected}>, found </{found}>")]
    MismatchedTag {
        /// Name of the open element
        expected: String,
        /// Name in the end tag
        found: String,
        /// Byte offset
        offset: usize,
    },

    /// Entity reference other than the five predefined ones
    #[error("unknown entity &{name}; at byte {offset}")]
    UnknownEntity {
        /// Entity name
        name: String,
        /// Byte offset
        offset: usize,
    },

    /// Character reference that is not a Unicode scalar value
    #[error("invalid character reference &#{reference}; at byte {offset}")]
    InvalidCharRef {
        /// Reference text after `&#`
        reference: String,
        /// Byte offset
        offset: usize,
    },

    /// DOCTYPE declarations are rejected
    #[error("DOCTYPE declarations are not supported (byte {offset})")]
    UnsupportedDoctype {
        /// Byte offset
        offset: usize,
    },

    /// Markup or text after the root element
    #[error("content after the root element at byte {offset}")]
    TrailingContent {
        /// Byte offset
        offset: usize,
    },

    /// Document has no root element
    #[error("missing root element")]
    MissingRoot,

    /// Document bytes are not UTF-8
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Decode error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// `status` text is non-empty and not a base-10 integer
    #[error("malformed status: {text:?} is not a base-10 integer")]
    MalformedStatus {
        /// The offending text
        text: String,
    },

    /// Document is not well-formed
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] XmlError),

    /// Root element name differs from the configured one
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        /// Configured root name
        expected: String,
        /// Root local name in the document
        found: String,
    },

    /// Record model rejected a value
    #[error("{0}")]
    Model(ModelError),
}

impl From<ModelError> for DecodeError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::MalformedStatus { text } => DecodeError::MalformedStatus { text },
            other => DecodeError::Model(other),
        }
    }
}
