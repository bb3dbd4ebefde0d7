//! Unified error types for problemdoc.
//!
//! This module provides a single error type that wraps the record model,
//! wire and configuration errors and presents one interface to users.

use problemdoc_core::ModelError;
use problemdoc_wire::{ConfigError, DecodeError, XmlError};
use thiserror::Error;

/// All problemdoc errors.
///
/// Decoding either yields a complete record or one of these; there is no
/// partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// `status` text is non-empty and not a base-10 integer
    #[error("malformed status: {0:?} is not a base-10 integer")]
    MalformedStatus(String),

    /// Document is not well-formed XML
    #[error("malformed document: {0}")]
    MalformedDocument(XmlError),

    /// Root element differs from the configured one (strict decoding)
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        /// Configured root name
        expected: String,
        /// Root local name found
        found: String,
    },

    /// Record model rejected a value
    #[error("invalid record: {0}")]
    Model(ModelError),

    /// Codec options are invalid
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// I/O error from the caller's reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for problemdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a status parse failure.
    pub fn is_malformed_status(&self) -> bool {
        matches!(self, Error::MalformedStatus(_))
    }

    /// Check if the document itself is not well-formed.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Error::MalformedDocument(_))
    }

    /// Check if this error came from I/O.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::MalformedStatus { text } => Error::MalformedStatus(text),
            DecodeError::MalformedDocument(xml) => Error::MalformedDocument(xml),
            DecodeError::UnexpectedRoot { expected, found } => {
                Error::UnexpectedRoot { expected, found }
            }
            DecodeError::Model(model) => Error::Model(model),
        }
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::MalformedStatus { text } => Error::MalformedStatus(text),
            other => Error::Model(other),
        }
    }
}
