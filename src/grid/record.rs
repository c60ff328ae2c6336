//! # Records
//!
//! A [`Record`] is one row of loosely-typed data, as delivered by the backend.
//! Field order follows the JSON document (`serde_json` is built with
//! `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered collection of records, rendered top to bottom.
pub type Dataset = Vec<Record>;

/// A mapping from field name to an arbitrary JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text for `field`, or an empty string when the record lacks it.
    pub fn cell(&self, field: &str) -> String {
        self.get(field).map(display_value).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Record {
    /// Objects become records; any other value becomes an empty record so it
    /// still occupies a row of blank cells.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Coerce a JSON value to the text shown in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Build a dataset from a decoded response body.
///
/// Accepts either a JSON array of records, or an object keyed by id whose
/// values are the records (taken in document order). Anything else is an
/// empty dataset.
pub fn dataset_from_json(value: Value) -> Dataset {
    match value {
        Value::Array(items) => items.into_iter().map(Record::from).collect(),
        Value::Object(map) => map.into_iter().map(|(_, v)| Record::from(v)).collect(),
        _ => Vec::new(),
    }
}
