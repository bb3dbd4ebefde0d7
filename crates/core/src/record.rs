//! Problem record

use crate::error::ModelError;
use crate::extensions::Extensions;
use crate::field::WELL_KNOWN_FIELDS;
use crate::value::ExtensionValue;
use serde::{Deserialize, Serialize};

/// A problem record: five optional well-known fields plus extensions
///
/// Absence and emptiness are distinct: `title: Some(String::new())` is a
/// present, empty title, while `title: None` is no title at all. `status`
/// is either unset or a number; `Some(0)` is a set status.
///
/// The JSON form follows RFC 7807: the problem type is serialized as
/// `"type"`, absent fields are omitted and extensions appear as top-level
/// members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// URI identifying the problem category (wire name `type`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,

    /// Short human-readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Numeric status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,

    /// Explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI identifying this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Caller-defined members
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl ProblemRecord {
    /// Create a record with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the problem type URI
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the status code
    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Add an extension member
    ///
    /// Fails with [`ModelError::ReservedKey`] for a well-known field name.
    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Result<Self, ModelError> {
        self.extensions.insert(key, value)?;
        Ok(self)
    }

    /// Check if no field is present and there are no extensions
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && WELL_KNOWN_FIELDS.iter().all(|f| !f.is_present(self))
    }
}
