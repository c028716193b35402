//! In-memory model of a profiler trace document.
//!
//! Event records have no fixed schema: every key/value pair is kept in the
//! order it appeared in the source document.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// A single field value in an event record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Convert any JSON value into a scalar.
    ///
    /// Non-scalar values (bool, null, arrays, objects) keep their JSON
    /// rendering as text so they still display.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => Scalar::Number(n.clone()),
            Value::String(s) => Scalar::Text(s.clone()),
            other => Scalar::Text(other.to_string()),
        }
    }

    /// Numeric view of the value. Numeric strings are accepted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

/// One timed occurrence in the trace, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventRecord {
    fields: IndexMap<String, Scalar>,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a decoded JSON object, keeping key order
    pub fn from_object(object: &serde_json::Map<String, Value>) -> Self {
        object
            .iter()
            .map(|(key, value)| (key.clone(), Scalar::from_value(value)))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Scalar)> for EventRecord {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Top-level parsed trace document
///
/// All metadata is optional: a missing field is `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    /// Profiler format version (string or number in practice)
    pub version: Option<Scalar>,

    /// Total events recorded by the profiler
    pub event_count: Option<Scalar>,

    /// Events actually written to this document
    pub events_written: Option<Scalar>,

    /// Number of CPUs on the capturing machine
    pub cpu_count: Option<Scalar>,

    /// Category names, referenced by `catIdx`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Event names, referenced by `nameIdx`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_names: Option<Vec<String>>,

    /// Events in document order
    pub events: Vec<EventRecord>,
}
