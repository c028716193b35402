//! SVG pie chart output.

use super::html::escape_html;
use super::{check_extension, write_output};
use crate::chart::{ChartConfig, ChartGeometry, PieSlice};
use crate::utils::error::OutputError;
use std::path::Path;

/// Render slices as an SVG document
///
/// Every slice is a filled wedge from the shared center, drawn in slice
/// order. With no slices the canvas is left empty.
pub fn render_pie_svg(slices: &[PieSlice], config: &ChartConfig) -> String {
    let geometry = ChartGeometry::from_config(config);
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    ));
    svg.push_str(&format!("<title>{}</title>", escape_html(&config.title)));

    for slice in slices {
        svg.push_str(&format!(
            r#"<path d="{}" fill="{}"/>"#,
            slice.wedge_path(&geometry),
            slice.color_hex
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Write SVG content to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    check_extension(output_path, "svg");
    write_output(svg_content, output_path)
}
