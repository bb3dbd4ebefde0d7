//! Record model for problemdoc
//!
//! This crate defines the in-memory problem record that the wire codecs
//! read and write:
//!
//! - [`ProblemRecord`]: five optional well-known fields plus [`Extensions`]
//! - [`ExtensionValue`]: the closed set of scalar extension values
//! - [`WellKnownField`]: the static table mapping wire names to typed fields
//!
//! ## Well-Known Fields
//!
//! | Wire name | Rust field | Type |
//! |-----------|------------|------|
//! | `type` | `problem_type` | `Option<String>` |
//! | `title` | `title` | `Option<String>` |
//! | `status` | `status` | `Option<i32>` |
//! | `detail` | `detail` | `Option<String>` |
//! | `instance` | `instance` | `Option<String>` |
//!
//! The well-known names are reserved: they can never be used as extension
//! keys, so a decoded document always routes them to the typed fields.
//!
//! Names are matched exactly and case-sensitively. Documents that spell the
//! fields in PascalCase (`<Title>`, `<Status>`) still decode, but those
//! elements land in the extensions under their PascalCase keys.
//!
//! ## Examples
//!
//! ```
//! use problemdoc_core::{ExtensionValue, ProblemRecord};
//!
//! let record = ProblemRecord::new()
//!     .with_title("Not Found")
//!     .with_status(404)
//!     .with_extension("traceId", "abc-123")
//!     .unwrap();
//!
//! assert_eq!(record.status, Some(404));
//! assert_eq!(
//!     record.extensions.get("traceId"),
//!     Some(&ExtensionValue::Text("abc-123".to_string()))
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod extensions;
pub mod field;
pub mod record;
pub mod value;

pub use error::ModelError;
pub use extensions::Extensions;
pub use field::{WellKnownField, WELL_KNOWN_FIELDS};
pub use record::ProblemRecord;
pub use value::ExtensionValue;
