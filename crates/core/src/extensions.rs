//! Extension map
//!
//! Extensions are caller-defined key/value pairs carried next to the
//! well-known fields. The map preserves insertion order so that encoded
//! output is deterministic, but equality ignores order. Lookups are hashed,
//! so building a map from a decoded document stays linear in its size.

use crate::error::ModelError;
use crate::field::WellKnownField;
use crate::value::ExtensionValue;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Insertion-ordered extension map
///
/// Keys are unique. Inserting an existing key replaces its value in place,
/// keeping the original position. Well-known field names are rejected with
/// [`ModelError::ReservedKey`]. The empty string is a valid key.
#[derive(Debug, Clone, Default)]
pub struct Extensions {
    entries: IndexMap<String, ExtensionValue>,
}

impl Extensions {
    /// Create an empty map
    pub fn new() -> Self {
        Extensions {
            entries: IndexMap::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&ExtensionValue> {
        self.entries.get(key)
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the value it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Result<Option<ExtensionValue>, ModelError> {
        let key = key.into();
        if WellKnownField::is_reserved(&key) {
            return Err(ModelError::ReservedKey(key));
        }

        Ok(self.entries.insert(key, value.into()))
    }

    /// Remove `key`, returning its value
    ///
    /// Later entries shift down, so the remaining order is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<ExtensionValue> {
        self.entries.shift_remove(key)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Build a map from pairs; later duplicates replace earlier ones
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, ModelError>
    where
        K: Into<String>,
        V: Into<ExtensionValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Extensions::new();
        for (key, value) in pairs {
            map.insert(key, value)?;
        }
        Ok(map)
    }
}

impl PartialEq for Extensions {
    fn eq(&self, other: &Self) -> bool {
        // Keys are unique, so equal length plus per-key equality is enough
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = (&'a str, &'a ExtensionValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a ExtensionValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// ============================================================================
// Serde (flattened JSON members)
// ============================================================================

impl Serialize for Extensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ExtensionsVisitor;

impl<'de> Visitor<'de> for ExtensionsVisitor {
    type Value = Extensions;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of extension members")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Extensions, A::Error> {
        let mut map = Extensions::new();
        while let Some((key, value)) = access.next_entry::<String, ExtensionValue>()? {
            map.insert(key, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExtensionsVisitor)
    }
}
