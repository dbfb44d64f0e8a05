//! Core data types: [`Record`] and [`Collection`].
//!
//! A record is an open-ended JSON object. The store constrains exactly one
//! field: `id`, which must be a non-empty string for the record to be
//! addressable. Everything else is opaque payload that round-trips through
//! the data file untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single stored record: an arbitrary JSON object carrying a string `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// The full ordered set of records, persisted as one JSON array.
/// Insertion order is significant: it drives `get_last` and the file layout.
pub type Collection = Vec<Record>;

impl Record {
    /// Create a record carrying only its `id` field.
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        Self(fields)
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The record's identifier, if present, a string, and non-empty.
    ///
    /// Records without a usable id can exist on disk (the store does not
    /// validate file contents field-by-field on load); they are simply
    /// never matched by lookups or deletes.
    pub fn id(&self) -> Option<&str> {
        self.0
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Read a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
