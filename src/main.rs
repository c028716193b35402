//! Profiler View CLI
//!
//! Renders profiler trace documents as an HTML page with an event table
//! and a duration pie chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use profiler_view::commands::{
    display_schema, display_version, execute_inspect, execute_render, validate_args, RenderArgs,
};
use profiler_view::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_TITLE};

/// Profiler View - tables and pie charts for profiler traces
#[derive(Parser, Debug)]
#[command(name = "profiler-view")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a trace document to HTML (and optionally SVG)
    Render {
        /// Trace document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the HTML page
        #[arg(short, long, default_value = "profile.html")]
        output: PathBuf,

        /// Output path for a standalone SVG pie chart (optional)
        #[arg(short, long)]
        svg: Option<PathBuf>,

        /// Page title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// Chart width in pixels
        #[arg(long, env = "PROFILER_VIEW_WIDTH", default_value_t = DEFAULT_CHART_WIDTH)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, env = "PROFILER_VIEW_HEIGHT", default_value_t = DEFAULT_CHART_HEIGHT)]
        height: u32,
    },

    /// Print a summary of what a trace document would render as
    Inspect {
        /// Trace document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Print the full render plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the accepted trace document format
    Schema {
        /// Show full format details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            output,
            svg,
            title,
            width,
            height,
        } => {
            let args = RenderArgs {
                input,
                output_html: output,
                output_svg: svg,
                title,
                width,
                height,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Inspect { input, json } => {
            execute_inspect(&input, json)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
