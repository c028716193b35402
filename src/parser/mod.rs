//! Trace parsing and document model.
//!
//! This module handles:
//! - Decoding raw JSON text from a profiler export
//! - Validating the top-level shape
//! - Keeping schema-less event records in document order

pub mod schema;
pub mod trace;

// Re-export main types
pub use schema::{EventRecord, Scalar, TraceDocument};
pub use trace::{parse_document, parse_value, read_document};
