//! Codec entry point for problemdoc.
//!
//! This module provides [`ProblemCodec`], which holds validated options and
//! exposes both directions of the XML codec over strings, byte slices and
//! I/O streams.

use crate::error::Result;
use problemdoc_core::ProblemRecord;
use problemdoc_wire::{
    decode_problem, decode_problem_bytes, encode_problem, CheckedOptions, CodecOptions,
};
use std::io::{Read, Write};
use tracing::trace;

/// The problem record codec.
///
/// Holds no state besides its options, so one codec can serve concurrent
/// calls from any number of threads.
///
/// # Example
///
/// ```
/// use problemdoc::{ProblemCodec, ProblemRecord};
///
/// let codec = ProblemCodec::default();
/// let record = ProblemRecord::new()
///     .with_title("Not Found")
///     .with_extension("traceId", "abc-123")
///     .unwrap();
///
/// let xml = codec.encode(&record);
/// assert_eq!(codec.decode(&xml).unwrap(), record);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemCodec {
    options: CheckedOptions,
}

impl ProblemCodec {
    /// Create a codec, validating `options`.
    pub fn new(options: CodecOptions) -> Result<Self> {
        Ok(ProblemCodec {
            options: options.check()?,
        })
    }

    /// Create a builder for codec configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use problemdoc::ProblemCodec;
    ///
    /// let codec = ProblemCodec::builder()
    ///     .root_name("ProblemDetails")
    ///     .no_namespace()
    ///     .pretty()
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(codec.options().root_name, "ProblemDetails");
    /// ```
    pub fn builder() -> ProblemCodecBuilder {
        ProblemCodecBuilder::new()
    }

    /// The options in effect.
    pub fn options(&self) -> &CodecOptions {
        self.options.get()
    }

    /// Encode a record to an XML document.
    pub fn encode(&self, record: &ProblemRecord) -> String {
        encode_problem(record, &self.options)
    }

    /// Encode a record and write the document to `writer`.
    pub fn write_to<W: Write>(&self, record: &ProblemRecord, mut writer: W) -> Result<()> {
        let document = self.encode(record);
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Decode an XML document.
    pub fn decode(&self, document: &str) -> Result<ProblemRecord> {
        Ok(decode_problem(document, &self.options)?)
    }

    /// Decode an XML document given as UTF-8 bytes.
    pub fn decode_slice(&self, document: &[u8]) -> Result<ProblemRecord> {
        Ok(decode_problem_bytes(document, &self.options)?)
    }

    /// Read a whole document from `reader` and decode it.
    ///
    /// The document is buffered in full before decoding.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<ProblemRecord> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        trace!(bytes = buf.len(), "Read problem document");
        self.decode_slice(&buf)
    }
}

/// Builder for [`ProblemCodec`].
///
/// Starts from [`CodecOptions::default`]; options are validated by
/// [`build`](ProblemCodecBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct ProblemCodecBuilder {
    options: CodecOptions,
}

impl ProblemCodecBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit options.
    pub fn options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the root element name.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_root_name(name);
        self
    }

    /// Set the default namespace declared on the root.
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.options = self.options.with_namespace(Some(namespace));
        self
    }

    /// Write no namespace declaration.
    pub fn no_namespace(mut self) -> Self {
        self.options = self.options.with_namespace(None);
        self
    }

    /// Set the element name standing in for the empty extension key.
    ///
    /// A sentinel that the name transform can produce for a real key makes
    /// that key indistinguishable from the empty key after decoding.
    pub fn empty_key_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.options = self.options.with_empty_key_sentinel(sentinel);
        self
    }

    /// Omit the XML declaration.
    pub fn no_declaration(mut self) -> Self {
        self.options = self.options.with_xml_declaration(false);
        self
    }

    /// Indent nested elements by two spaces.
    pub fn pretty(mut self) -> Self {
        self.options = self.options.with_indent(Some(2));
        self
    }

    /// Require the decoded root element to match the root name.
    pub fn strict(mut self) -> Self {
        self.options = self.options.with_require_root_name(true);
        self
    }

    /// Validate the options and build the codec.
    pub fn build(self) -> Result<ProblemCodec> {
        ProblemCodec::new(self.options)
    }
}
