//! The full trace-to-visualization pipeline.
//!
//! Parse, summarise, color, tabulate and plan the chart in one synchronous
//! pass. Every call builds its own category set, table and slices; nothing
//! is shared between loads.

use crate::aggregator::{build_event_table, CategorySet, EventTable, HeaderSummary};
use crate::chart::{plan_from_table, PieSlice};
use crate::parser::{parse_document, read_document, TraceDocument};
use crate::utils::error::ParseError;
use log::info;
use rand::Rng;
use serde::Serialize;
use std::path::Path;

/// Everything a host needs to draw one trace document
#[derive(Debug, Clone, Serialize)]
pub struct TraceView {
    pub header: HeaderSummary,
    pub categories: CategorySet,
    pub table: EventTable,
    pub slices: Vec<PieSlice>,
}

/// Build the render plan for a parsed document
pub fn build_view<R: Rng + ?Sized>(document: &TraceDocument, rng: &mut R) -> TraceView {
    let header = HeaderSummary::from_document(document);
    let categories = CategorySet::from_records(&document.events);
    let table = build_event_table(&document.events, &categories, rng);
    let slices = plan_from_table(&table);

    info!(
        "Trace view: {} rows, {} categories, {} slices",
        table.rows.len(),
        categories.len(),
        slices.len()
    );

    TraceView {
        header,
        categories,
        table,
        slices,
    }
}

/// Parse raw trace text and build its render plan
///
/// # Errors
/// Fails before producing any output if the text is not a JSON object.
pub fn load_view(text: &str) -> Result<TraceView, ParseError> {
    let document = parse_document(text)?;
    Ok(build_view(&document, &mut rand::thread_rng()))
}

/// Read a trace file and build its render plan
pub fn load_view_from_file(path: impl AsRef<Path>) -> Result<TraceView, ParseError> {
    let document = read_document(path)?;
    Ok(build_view(&document, &mut rand::thread_rng()))
}
