//! Header summary for a trace document.

use crate::parser::schema::{Scalar, TraceDocument};
use serde::Serialize;

/// Document metadata shown above the event table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSummary {
    pub version: String,
    pub event_count: String,
    pub events_written: String,
    pub cpu_count: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_names: Option<Vec<String>>,
}

impl HeaderSummary {
    /// Missing metadata becomes empty text
    pub fn from_document(document: &TraceDocument) -> Self {
        let text = |value: &Option<Scalar>| value.as_ref().map(ToString::to_string).unwrap_or_default();

        Self {
            version: text(&document.version),
            event_count: text(&document.event_count),
            events_written: text(&document.events_written),
            cpu_count: text(&document.cpu_count),
            categories: document.categories.clone(),
            event_names: document.event_names.clone(),
        }
    }

    /// The four metadata lines
    pub fn metadata_lines(&self) -> Vec<String> {
        vec![
            format!("Profiler Version: {}", self.version),
            format!("Total Event Count: {}", self.event_count),
            format!("Events Written: {}", self.events_written),
            format!("CPU Count: {}", self.cpu_count),
        ]
    }

    /// Full plain-text header, including any listings
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.metadata_lines();
        if let Some(categories) = &self.categories {
            lines.push("Categories:".to_string());
            lines.extend(enumerate_listing(categories));
        }
        if let Some(names) = &self.event_names {
            lines.push("Event Names:".to_string());
            lines.extend(enumerate_listing(names));
        }
        lines
    }
}

/// Render a list as `[index] = value` entries
pub fn enumerate_listing(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("[{}] = {}", i, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_listings() {
        let document = TraceDocument {
            version: Some(Scalar::from(1u64)),
            event_count: Some(Scalar::from(11276u64)),
            events_written: Some(Scalar::from(364u64)),
            cpu_count: Some(Scalar::from(8u64)),
            categories: Some(vec!["Main".to_string(), "Qt".to_string()]),
            event_names: Some(vec!["Compute".to_string()]),
            events: Vec::new(),
        };

        let lines = HeaderSummary::from_document(&document).lines();
        assert_eq!(
            lines,
            vec![
                "Profiler Version: 1",
                "Total Event Count: 11276",
                "Events Written: 364",
                "CPU Count: 8",
                "Categories:",
                "[0] = Main",
                "[1] = Qt",
                "Event Names:",
                "[0] = Compute",
            ]
        );
    }

    #[test]
    fn test_missing_metadata_is_blank() {
        let summary = HeaderSummary::from_document(&TraceDocument::default());
        assert_eq!(summary.version, "");
        assert_eq!(summary.lines().len(), 4);
    }
}
