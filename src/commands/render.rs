//! Render command implementation.
//!
//! The render command:
//! 1. Reads and parses the trace document
//! 2. Builds the header, event table and pie chart plan
//! 3. Writes the HTML page and optional standalone SVG

use crate::chart::ChartConfig;
use crate::output::{render_page, render_pie_svg, write_html, write_svg};
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_TITLE};
use crate::view::load_view_from_file;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Largest accepted chart side in pixels
const MAX_CHART_SIDE: u32 = 10_000;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Trace document to render
    pub input: PathBuf,

    /// Output path for the HTML page
    pub output_html: PathBuf,

    /// Output path for a standalone SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Page and chart title
    pub title: String,

    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_html: PathBuf::from("profile.html"),
            output_svg: None,
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl RenderArgs {
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::new()
            .with_title(self.title.clone())
            .with_size(self.width, self.height)
    }
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Output HTML path cannot be empty");
    }

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Chart width and height must be greater than 0");
    }

    if args.width > MAX_CHART_SIDE || args.height > MAX_CHART_SIDE {
        anyhow::bail!("Chart size is too large (max {} pixels per side)", MAX_CHART_SIDE);
    }

    Ok(())
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// A document that fails to parse stops the command before any file is
/// written.
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering trace: {}", args.input.display());

    info!("Step 1/2: Building trace view...");
    let view = load_view_from_file(&args.input)
        .with_context(|| format!("Failed to load trace document {}", args.input.display()))?;

    debug!(
        "Duration total {} across {} rows",
        view.table.duration_total,
        view.table.rows.len()
    );

    info!("Step 2/2: Writing output files...");
    let config = args.chart_config();

    let page = render_page(&view, &config);
    write_html(&page, &args.output_html).context("Failed to write HTML page")?;
    info!("✓ Page written to: {}", args.output_html.display());

    if let Some(svg_path) = &args.output_svg {
        let svg = render_pie_svg(&view.slices, &config);
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("✓ Chart written to: {}", svg_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
