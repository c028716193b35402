//! Event table construction.
//!
//! Columns come from the keys of the first event. When any event carries a
//! `duration`, rows are reordered by descending duration and every row with
//! a duration gets a color plus an entry in the parallel duration/color
//! lists consumed by the pie chart planner.

use super::category::{CategorySet, HexColor};
use crate::parser::schema::EventRecord;
use crate::utils::config::{COLOR_ID_FIELD, DURATION_FIELD};
use log::{debug, warn};
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

/// An event row with its optional display color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredRow {
    pub record: EventRecord,

    /// Background for the duration cell; set only when the row has a duration
    pub color: Option<HexColor>,
}

impl ColoredRow {
    /// Cell text for each column, empty where the record lacks the key
    pub fn cells(&self, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|column| {
                self.record
                    .get(column)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// Ordered, annotated event rows ready for display
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventTable {
    /// Field names of the first event, in its order
    pub columns: Vec<String>,

    pub rows: Vec<ColoredRow>,

    /// Sum of all row durations
    pub duration_total: f64,

    /// Per-row durations, in row order, for rows that have one
    pub durations: Vec<f64>,

    /// Colors parallel to `durations`
    pub colors: Vec<HexColor>,

    /// Rows were reordered by descending duration
    pub sorted_by_duration: bool,

    /// The first event carries a `colorId` field
    pub has_color_id: bool,
}

impl EventTable {
    /// Upper-cased column labels
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.to_uppercase()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the event table
///
/// **Public** - main entry point for table construction
///
/// # Arguments
/// * `events` - Events in document order
/// * `categories` - Category set built from the same events in document order
/// * `rng` - Source for the fallback color of uncategorised rows
pub fn build_event_table<R: Rng + ?Sized>(
    events: &[EventRecord],
    categories: &CategorySet,
    rng: &mut R,
) -> EventTable {
    let Some(first) = events.first() else {
        debug!("No events, table is empty");
        return EventTable::default();
    };

    let columns: Vec<String> = first.keys().map(str::to_string).collect();
    let has_color_id = first.contains_key(COLOR_ID_FIELD);
    if has_color_id {
        debug!("Events carry '{}'", COLOR_ID_FIELD);
    }

    let mut records = events.to_vec();
    let sorted_by_duration = records.iter().any(|r| r.contains_key(DURATION_FIELD));
    if sorted_by_duration {
        sort_by_duration(&mut records);
    }

    let mut table = EventTable {
        columns,
        rows: Vec::with_capacity(records.len()),
        sorted_by_duration,
        has_color_id,
        ..Default::default()
    };

    // Colors and totals follow the sorted row order
    for record in records {
        let color = record_duration(&record).map(|duration| {
            let color = categories.assign_color(&record, rng);
            table.duration_total += duration;
            table.durations.push(duration);
            table.colors.push(color);
            color
        });
        table.rows.push(ColoredRow { record, color });
    }

    debug!(
        "Built table: {} columns, {} rows, {} with duration (total {})",
        table.columns.len(),
        table.rows.len(),
        table.durations.len(),
        table.duration_total
    );

    table
}

/// Sort records by descending duration; records without one go last
pub fn sort_by_duration(records: &mut [EventRecord]) {
    records.sort_by(compare_duration_desc);
}

fn compare_duration_desc(a: &EventRecord, b: &EventRecord) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(record: &EventRecord) -> f64 {
    match record.get(DURATION_FIELD) {
        Some(value) => value.as_f64().unwrap_or(0.0),
        None => f64::NEG_INFINITY,
    }
}

/// Duration of a record
///
/// `None` when the field is absent. A present but non-numeric value counts
/// as zero.
pub fn record_duration(record: &EventRecord) -> Option<f64> {
    let value = record.get(DURATION_FIELD)?;
    Some(value.as_f64().unwrap_or_else(|| {
        warn!("Non-numeric duration '{}', counting as 0", value);
        0.0
    }))
}
