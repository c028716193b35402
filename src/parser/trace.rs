//! Trace document parser.
//!
//! Decodes raw JSON text into a [`TraceDocument`]. Only two things are
//! fatal: text that is not JSON, and a top-level value that is not an
//! object. Everything else degrades to an absent or empty field.

use super::schema::{EventRecord, Scalar, TraceDocument};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::path::Path;

/// Parse raw trace text
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::MalformedDocument` - text is not valid JSON
/// * `ParseError::SchemaViolation` - JSON is valid but not an object
pub fn parse_document(text: &str) -> Result<TraceDocument, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    parse_value(&value)
}

/// Read and parse a trace file from disk
pub fn read_document(path: impl AsRef<Path>) -> Result<TraceDocument, ParseError> {
    let path = path.as_ref();
    debug!("Reading trace document from: {}", path.display());

    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

/// Build a document from an already decoded JSON value
pub fn parse_value(value: &Value) -> Result<TraceDocument, ParseError> {
    let Value::Object(obj) = value else {
        return Err(ParseError::SchemaViolation(format!(
            "Trace must be a JSON object, found {}",
            json_kind(value)
        )));
    };

    let document = TraceDocument {
        version: obj.get("version").map(Scalar::from_value),
        event_count: extract_count(obj, "eventCount"),
        events_written: extract_count(obj, "eventsWritten"),
        cpu_count: extract_count(obj, "cpuCount"),
        categories: extract_string_list(obj, "categories"),
        event_names: extract_string_list(obj, "eventNames"),
        events: extract_events(obj),
    };

    debug!(
        "Parsed trace document: {} events, {} categories, {} event names",
        document.events.len(),
        document.categories.as_ref().map_or(0, Vec::len),
        document.event_names.as_ref().map_or(0, Vec::len)
    );

    Ok(document)
}

/// Extract a count field
///
/// Integer counts (numbers or decimal/hex strings) are normalized; anything
/// else is kept as-is so the header still shows the raw value.
///
/// **Private** - internal extraction logic
fn extract_count(obj: &Map<String, Value>, field: &str) -> Option<Scalar> {
    let value = obj.get(field)?;
    match parse_json_u64(value) {
        Some(count) => Some(Scalar::from(count)),
        None => {
            warn!("Found '{}' but failed to parse it as a count: {}", field, value);
            Some(Scalar::from_value(value))
        }
    }
}

/// Parse a u64 from a JSON number or a decimal/hex string
pub fn parse_json_u64(val: &Value) -> Option<u64> {
    if let Some(n) = val.as_u64() {
        return Some(n);
    }
    if let Some(f) = val.as_f64() {
        return (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then_some(f as u64);
    }
    let s = val.as_str()?.trim();
    match s.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => s.parse::<u64>().ok(),
    }
}

/// Extract an optional list of labels
///
/// **Private** - internal extraction logic
fn extract_string_list(obj: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    let value = obj.get(field)?;
    let Some(items) = value.as_array() else {
        warn!("Ignoring '{}': expected an array, found {}", field, json_kind(value));
        return None;
    };

    Some(
        items
            .iter()
            .map(|item| Scalar::from_value(item).to_string())
            .collect(),
    )
}

/// Extract event records, skipping entries that are not objects
///
/// **Private** - internal extraction logic
fn extract_events(obj: &Map<String, Value>) -> Vec<EventRecord> {
    let Some(value) = obj.get("events") else {
        debug!("No 'events' field in trace, treating as empty");
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        warn!("Ignoring 'events': expected an array, found {}", json_kind(value));
        return Vec::new();
    };

    let mut events = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(fields) => events.push(EventRecord::from_object(fields)),
            None => warn!("Skipping event {}: expected an object, found {}", index, json_kind(item)),
        }
    }
    events
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_u64() {
        assert_eq!(parse_json_u64(&json!(364)), Some(364));
        assert_eq!(parse_json_u64(&json!("364")), Some(364));
        assert_eq!(parse_json_u64(&json!("0x16c")), Some(364));
        assert_eq!(parse_json_u64(&json!(8.0)), Some(8));
        assert_eq!(parse_json_u64(&json!(-1)), None);
        assert_eq!(parse_json_u64(&json!("eight")), None);
    }

    #[test]
    fn test_irregular_counts_keep_raw_value() {
        let doc = parse_value(&json!({"eventCount": -3, "cpuCount": 2.5, "eventsWritten": "0x10"})).unwrap();
        assert_eq!(doc.event_count.map(|c| c.to_string()), Some("-3".to_string()));
        assert_eq!(doc.cpu_count.map(|c| c.to_string()), Some("2.5".to_string()));
        assert_eq!(doc.events_written, Some(Scalar::from(16u64)));
    }

    #[test]
    fn test_events_not_array_is_empty() {
        let doc = parse_value(&json!({"events": "nope"})).unwrap();
        assert!(doc.events.is_empty());
    }

    #[test]
    fn test_non_object_events_are_skipped() {
        let doc = parse_value(&json!({"events": [1, {"duration": 2}, "x"]})).unwrap();
        assert_eq!(doc.events.len(), 1);
        assert!(doc.events[0].contains_key("duration"));
    }

    #[test]
    fn test_bad_label_list_is_ignored() {
        let doc = parse_value(&json!({"categories": 3, "eventNames": ["a", 2]})).unwrap();
        assert!(doc.categories.is_none());
        assert_eq!(doc.event_names, Some(vec!["a".to_string(), "2".to_string()]));
    }
}
