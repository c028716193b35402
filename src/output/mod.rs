//! Output writers for rendered trace views.
//!
//! This module handles writing data to disk in various formats:
//! - HTML pages (header, event table and pie chart)
//! - Standalone SVG pie charts

pub mod html;
pub mod svg;

// Re-export main functions
pub use html::{escape_html, render_page, write_html};
pub use svg::{render_pie_svg, write_svg};

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Write text content to a file, creating parent directories as needed
///
/// **Private** - shared by the HTML and SVG writers
fn write_output(content: &str, output_path: &Path) -> Result<(), OutputError> {
    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    info!(
        "Wrote {} ({} bytes, {:.2} KB)",
        output_path.display(),
        content.len(),
        content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Note a mismatched extension without refusing the write
fn check_extension(path: &Path, expected: &str) {
    if let Some(ext) = path.extension() {
        if ext != expected {
            debug!("File does not have .{} extension: {}", expected, path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/view.html");

        write_output("<html></html>", &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
