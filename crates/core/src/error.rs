//! Errors raised by the record model

use thiserror::Error;

/// Record model errors
///
/// These are raised when a value cannot be placed into a [`ProblemRecord`]:
/// either the key is reserved for a typed field, or the text of a typed field
/// does not parse.
///
/// [`ProblemRecord`]: crate::ProblemRecord
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Extension key collides with a well-known field name
    #[error("reserved key: '{0}' is a well-known field and cannot be an extension")]
    ReservedKey(String),

    /// Status text is non-empty and not a base-10 integer
    #[error("malformed status: {text:?} is not a base-10 integer")]
    MalformedStatus {
        /// The offending text, exactly as read
        text: String,
    },
}
