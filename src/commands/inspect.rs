//! Inspect command: print what a trace document would render as.

use crate::view::load_view_from_file;
use anyhow::{Context, Result};
use std::path::Path;

/// Print the header summary and table/chart totals, or the whole plan as JSON
pub fn execute_inspect(input: &Path, as_json: bool) -> Result<()> {
    let view = load_view_from_file(input)
        .with_context(|| format!("Failed to load trace document {}", input.display()))?;

    if as_json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize trace view")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Trace: {}", input.display());
    for line in view.header.lines() {
        println!("  {}", line);
    }
    println!();
    println!("  Columns: {}", view.table.headers().join(", "));
    println!("  Rows: {}", view.table.rows.len());
    println!("  Distinct categories: {}", view.categories.len());
    if view.table.sorted_by_duration {
        println!("  Duration total: {}", view.table.duration_total);
    }
    println!("  Pie slices: {}", view.slices.len());

    Ok(())
}
