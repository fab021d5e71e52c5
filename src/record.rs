//! The fixed-schema output record.
//!
//! A [`Record`] is the only entity that escapes the reconstruction core; it
//! is handed to the external persistence collaborator. Every record carries a
//! non-null integer `id`; every other field of the active profile's schema is
//! present in the record and nullable.

use indexmap::IndexMap;
use serde::Serialize;

/// A single normalized field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An integer value (parsed years, ...)
    Int(i64),
    /// A free-text value, kept verbatim from the source cell
    Text(String),
}

impl FieldValue {
    /// The text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Int(_) => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

/// The final fixed-schema structured output of one row.
///
/// The field set is fixed by the active profile: every schema field is
/// present (in schema order) from construction, defaulting to `None`.
/// Serializes flat, e.g. `{"id": 482, "organizacia": "Ministry", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Unique row identifier; always present
    pub id: i64,
    /// All other schema fields, nullable, in schema order
    #[serde(flatten)]
    pub fields: IndexMap<String, Option<FieldValue>>,
}

impl Record {
    /// Create a record with the given id and every schema field unset.
    pub fn new(id: i64, field_names: &[String]) -> Self {
        let fields = field_names
            .iter()
            .map(|name| (name.clone(), None))
            .collect();
        Self { id, fields }
    }

    /// Set a schema field. Unknown field names are ignored (profile
    /// validation guarantees rules only target schema fields).
    pub fn set(&mut self, field: &str, value: FieldValue) {
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = Some(value);
        }
    }

    /// Explicitly null a schema field (placeholder normalization).
    pub fn clear(&mut self, field: &str) {
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = None;
        }
    }

    /// The value of a schema field, if set.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field).and_then(Option::as_ref)
    }

    /// The text content of a schema field, if set to a text value.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    /// The integer content of a schema field, if set to an integer value.
    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_int)
    }
}
