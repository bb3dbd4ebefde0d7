//! Convenient imports for problemdoc.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use problemdoc::prelude::*;
//!
//! let codec = ProblemCodec::default();
//! let xml = codec.encode(&ProblemRecord::new().with_status(404));
//! assert_eq!(codec.decode(&xml).unwrap().status, Some(404));
//! ```

// Main entry point
pub use crate::codec::{ProblemCodec, ProblemCodecBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Record model
pub use problemdoc_core::{ExtensionValue, Extensions, ProblemRecord};

// Configuration
pub use problemdoc_wire::CodecOptions;
