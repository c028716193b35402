//! Profiler View
//!
//! Renders a captured profiler trace document as an event table and a
//! pie chart of event durations.
//!
//! The pipeline is parse → category colors and event table → pie slices,
//! exposed as a single call:
//!
//! ```ignore
//! let view = profiler_view::view::load_view(&text)?;
//! for slice in &view.slices {
//!     println!("{} {} {}", slice.color_hex, slice.start_angle_radians, slice.sweep_angle_radians);
//! }
//! ```
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install profiler-view
//! profiler-view --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
pub mod view;

pub use view::{build_view, load_view, TraceView};
