//! Well-known field table
//!
//! The five typed fields of a problem record are resolved through a static
//! table of `(name, formatter, parser)` entries rather than by inspecting the
//! record at runtime. Both wire directions walk the same table, so the field
//! order and the exact, case-sensitive names live in one place.

use crate::error::ModelError;
use crate::record::ProblemRecord;
use std::borrow::Cow;

type FormatFn = for<'a> fn(&'a ProblemRecord) -> Option<Cow<'a, str>>;
type ApplyFn = fn(&mut ProblemRecord, String) -> Result<(), ModelError>;

/// One typed field of a problem record
pub struct WellKnownField {
    name: &'static str,
    format: FormatFn,
    apply: ApplyFn,
}

/// The well-known fields in wire order: `type, title, status, detail, instance`
pub static WELL_KNOWN_FIELDS: [WellKnownField; 5] = [
    WellKnownField {
        name: "type",
        format: format_type,
        apply: apply_type,
    },
    WellKnownField {
        name: "title",
        format: format_title,
        apply: apply_title,
    },
    WellKnownField {
        name: "status",
        format: format_status,
        apply: apply_status,
    },
    WellKnownField {
        name: "detail",
        format: format_detail,
        apply: apply_detail,
    },
    WellKnownField {
        name: "instance",
        format: format_instance,
        apply: apply_instance,
    },
];

impl WellKnownField {
    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Find the field with exactly this wire name
    pub fn lookup(name: &str) -> Option<&'static WellKnownField> {
        WELL_KNOWN_FIELDS.iter().find(|f| f.name == name)
    }

    /// Check if `name` belongs to a well-known field
    pub fn is_reserved(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    /// Textual form of the field, or `None` when absent
    ///
    /// An empty string field is present and formats as `""`.
    pub fn format<'a>(&self, record: &'a ProblemRecord) -> Option<Cow<'a, str>> {
        (self.format)(record)
    }

    /// Parse `text` and store it in the field
    ///
    /// String fields take the text verbatim. `status` treats empty text as
    /// absent and otherwise requires a base-10 integer.
    pub fn apply(&self, record: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
        (self.apply)(record, text)
    }

    /// Check if the field is present on `record`
    pub fn is_present(&self, record: &ProblemRecord) -> bool {
        self.format(record).is_some()
    }
}

impl std::fmt::Debug for WellKnownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WellKnownField").field(&self.name).finish()
    }
}

fn borrowed(field: &Option<String>) -> Option<Cow<'_, str>> {
    field.as_deref().map(Cow::Borrowed)
}

fn format_type(r: &ProblemRecord) -> Option<Cow<'_, str>> {
    borrowed(&r.problem_type)
}

fn format_title(r: &ProblemRecord) -> Option<Cow<'_, str>> {
    borrowed(&r.title)
}

fn format_status(r: &ProblemRecord) -> Option<Cow<'_, str>> {
    r.status.map(|s| Cow::Owned(s.to_string()))
}

fn format_detail(r: &ProblemRecord) -> Option<Cow<'_, str>> {
    borrowed(&r.detail)
}

fn format_instance(r: &ProblemRecord) -> Option<Cow<'_, str>> {
    borrowed(&r.instance)
}

fn apply_type(r: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
    r.problem_type = Some(text);
    Ok(())
}

fn apply_title(r: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
    r.title = Some(text);
    Ok(())
}

fn apply_status(r: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
    r.status = parse_status(&text)?;
    Ok(())
}

fn apply_detail(r: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
    r.detail = Some(text);
    Ok(())
}

fn apply_instance(r: &mut ProblemRecord, text: String) -> Result<(), ModelError> {
    r.instance = Some(text);
    Ok(())
}

/// Parse status text; empty means absent
///
/// Surrounding XML whitespace is allowed, a leading sign is allowed,
/// nothing else is.
fn parse_status(text: &str) -> Result<Option<i32>, ModelError> {
    if text.is_empty() {
        return Ok(None);
    }

    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .parse::<i32>()
        .map(Some)
        .map_err(|_| ModelError::MalformedStatus {
            text: text.to_string(),
        })
}
