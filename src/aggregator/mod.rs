//! Aggregation of parsed trace data into display-ready structures.
//!
//! This module transforms a parsed trace document into:
//! - A category set and per-category colors
//! - An ordered, colored event table
//! - A header summary of document metadata

pub mod category;
pub mod summary;
pub mod table;

// Re-export main types and functions
pub use category::{category_color, random_color, CategoryKind, CategorySet, CategoryValue, HexColor};
pub use summary::HeaderSummary;
pub use table::{build_event_table, ColoredRow, EventTable};
