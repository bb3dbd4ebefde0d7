//! Codec options

use super::name::{is_valid_name, DEFAULT_EMPTY_KEY_SENTINEL};
use problemdoc_core::WellKnownField;
use thiserror::Error;

/// Default namespace of problem documents (RFC 7807, Appendix A)
pub const PROBLEM_NAMESPACE: &str = "urn:ietf:rfc:7807";

/// Invalid codec options
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Root name is not a valid unprefixed XML name
    #[error("invalid root element name: {0:?}")]
    InvalidRootName(String),

    /// Sentinel is not a valid unprefixed XML name
    #[error("invalid empty-key sentinel: {0:?}")]
    InvalidSentinel(String),

    /// Sentinel equals a well-known field name
    #[error("empty-key sentinel {0:?} is a well-known field name")]
    ReservedSentinel(String),
}

/// Codec options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Root element name written by the encoder
    pub root_name: String,
    /// Default namespace declared on the root, if any
    pub namespace: Option<String>,
    /// Element name standing in for the empty extension key
    pub empty_key_sentinel: String,
    /// Whether to write the XML declaration
    pub xml_declaration: bool,
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
    /// Whether the decoder rejects a root whose local name differs from `root_name`
    pub require_root_name: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            root_name: "problem".to_string(),
            namespace: Some(PROBLEM_NAMESPACE.to_string()),
            empty_key_sentinel: DEFAULT_EMPTY_KEY_SENTINEL.to_string(),
            xml_declaration: true,
            indent: None,
            require_root_name: false,
        }
    }
}

impl CodecOptions {
    /// Strict options - the decoder requires the configured root name
    pub fn strict() -> Self {
        CodecOptions {
            require_root_name: true,
            ..Default::default()
        }
    }

    /// Pretty options - two-space indentation
    pub fn pretty() -> Self {
        CodecOptions {
            indent: Some(2),
            ..Default::default()
        }
    }

    /// Set the root element name
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set or clear the default namespace
    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(str::to_string);
        self
    }

    /// Set the empty-key sentinel
    pub fn with_empty_key_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.empty_key_sentinel = sentinel.into();
        self
    }

    /// Enable or disable the XML declaration
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Set the indent width
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Require the decoded root to match `root_name`
    pub fn with_require_root_name(mut self, required: bool) -> Self {
        self.require_root_name = required;
        self
    }

    /// Check the options
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_name(&self.root_name) {
            return Err(ConfigError::InvalidRootName(self.root_name.clone()));
        }
        if !is_valid_name(&self.empty_key_sentinel) {
            return Err(ConfigError::InvalidSentinel(self.empty_key_sentinel.clone()));
        }
        if WellKnownField::is_reserved(&self.empty_key_sentinel) {
            return Err(ConfigError::ReservedSentinel(self.empty_key_sentinel.clone()));
        }
        Ok(())
    }

    /// Validate the options, producing the form the codec functions accept
    pub fn check(self) -> Result<CheckedOptions, ConfigError> {
        CheckedOptions::new(self)
    }
}

/// Codec options that passed [`CodecOptions::validate`]
///
/// The encode and decode functions take this type, so an empty or
/// malformed root name or sentinel never reaches the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedOptions {
    options: CodecOptions,
}

impl CheckedOptions {
    /// Validate `options`
    pub fn new(options: CodecOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(CheckedOptions { options })
    }

    /// The validated options
    pub fn get(&self) -> &CodecOptions {
        &self.options
    }

    /// Give back the options
    pub fn into_inner(self) -> CodecOptions {
        self.options
    }
}

impl TryFrom<CodecOptions> for CheckedOptions {
    type Error = ConfigError;

    fn try_from(options: CodecOptions) -> Result<Self, ConfigError> {
        CheckedOptions::new(options)
    }
}

impl std::ops::Deref for CheckedOptions {
    type Target = CodecOptions;

    fn deref(&self) -> &CodecOptions {
        &self.options
    }
}
