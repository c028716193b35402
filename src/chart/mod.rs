//! Pie chart planning and geometry.
//!
//! Slices are proportional to each event's share of the total duration and
//! are drawn in table row order.

pub mod pie;

// Re-export main types
pub use pie::{plan_from_table, plan_pie_chart, ChartConfig, ChartGeometry, PieSlice};
