//! Extension value type
//!
//! Extension values form a closed set of scalar variants. The wire layer
//! writes any of them as element text and reads every value back as opaque
//! [`ExtensionValue::Text`]; structured values are not supported.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Scalar extension value
///
/// ## Wire Text
///
/// | Variant | Wire text |
/// |---------|-----------|
/// | `Text` | the string itself |
/// | `Integer` | decimal literal |
/// | `Float` | shortest round-trip literal, `INF`, `-INF`, `NaN` |
/// | `Bool` | `true` / `false` |
/// | `Null` | none (written as an empty element) |
///
/// Float equality follows IEEE-754: `Float(NaN) != Float(NaN)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    /// UTF-8 text, also the variant every decoded value takes
    Text(String),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// Boolean true or false
    Bool(bool),

    /// Present key without a value
    Null,
}

impl ExtensionValue {
    /// Returns the variant name (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            ExtensionValue::Text(_) => "Text",
            ExtensionValue::Integer(_) => "Integer",
            ExtensionValue::Float(_) => "Float",
            ExtensionValue::Bool(_) => "Bool",
            ExtensionValue::Null => "Null",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ExtensionValue::Null)
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtensionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Textual form written as element content
    ///
    /// Returns `None` for [`ExtensionValue::Null`], which is written as an
    /// empty element.
    pub fn to_wire_text(&self) -> Option<String> {
        match self {
            ExtensionValue::Text(s) => Some(s.clone()),
            ExtensionValue::Integer(i) => Some(i.to_string()),
            ExtensionValue::Float(f) => Some(format_float(*f)),
            ExtensionValue::Bool(b) => Some(b.to_string()),
            ExtensionValue::Null => None,
        }
    }

    /// The value a decoder yields after this value has been written
    ///
    /// Decoding is opaque: every value comes back as text, and `Null`
    /// comes back as empty text.
    pub fn to_decoded(&self) -> ExtensionValue {
        ExtensionValue::Text(self.to_wire_text().unwrap_or_default())
    }
}

/// Format a float using XML Schema spellings for the special values
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        f.to_string()
    }
}

impl fmt::Display for ExtensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wire_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

impl From<String> for ExtensionValue {
    fn from(s: String) -> Self {
        ExtensionValue::Text(s)
    }
}

impl From<&str> for ExtensionValue {
    fn from(s: &str) -> Self {
        ExtensionValue::Text(s.to_string())
    }
}

impl From<i64> for ExtensionValue {
    fn from(i: i64) -> Self {
        ExtensionValue::Integer(i)
    }
}

impl From<i32> for ExtensionValue {
    fn from(i: i32) -> Self {
        ExtensionValue::Integer(i64::from(i))
    }
}

impl From<f64> for ExtensionValue {
    fn from(f: f64) -> Self {
        ExtensionValue::Float(f)
    }
}

impl From<bool> for ExtensionValue {
    fn from(b: bool) -> Self {
        ExtensionValue::Bool(b)
    }
}

impl<T: Into<ExtensionValue>> From<Option<T>> for ExtensionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ExtensionValue::Null, Into::into)
    }
}

// ============================================================================
// Serde (JSON scalars)
// ============================================================================

impl Serialize for ExtensionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExtensionValue::Text(s) => serializer.serialize_str(s),
            ExtensionValue::Integer(i) => serializer.serialize_i64(*i),
            ExtensionValue::Float(f) => serializer.serialize_f64(*f),
            ExtensionValue::Bool(b) => serializer.serialize_bool(*b),
            ExtensionValue::Null => serializer.serialize_unit(),
        }
    }
}

struct ExtensionValueVisitor;

impl<'de> Visitor<'de> for ExtensionValueVisitor {
    type Value = ExtensionValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string, number, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ExtensionValue, E> {
        // Fall back to f64 for values above i64::MAX
        Ok(i64::try_from(v)
            .map(ExtensionValue::Integer)
            .unwrap_or(ExtensionValue::Float(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ExtensionValue, E> {
        Ok(ExtensionValue::Null)
    }
}

impl<'de> Deserialize<'de> for ExtensionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExtensionValueVisitor)
    }
}
