//! HTML page output.
//!
//! Lays out a trace view as a single self-contained page: metadata header,
//! the event table with colored duration cells, and the pie chart inlined
//! as SVG.

use super::svg::render_pie_svg;
use super::{check_extension, write_output};
use crate::aggregator::summary::enumerate_listing;
use crate::aggregator::{EventTable, HeaderSummary};
use crate::chart::ChartConfig;
use crate::utils::config::{DURATION_FIELD, ROW_TEXT_COLOR};
use crate::utils::error::OutputError;
use crate::view::TraceView;
use chrono::Utc;
use log::debug;
use std::path::Path;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a complete HTML page for a trace view
pub fn render_page(view: &TraceView, config: &ChartConfig) -> String {
    let title = escape_html(&config.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", title));
    html.push_str(&format!("<h1>{}</h1>\n", title));

    html.push_str(&render_header(&view.header));
    html.push_str(&render_table(&view.table));
    html.push_str("<div id=\"chart\">\n");
    html.push_str(&render_pie_svg(&view.slices, config));
    html.push_str("\n</div>\n");

    html.push_str(&format!(
        "<p><small>Generated {}</small></p>\n</body>\n</html>\n",
        Utc::now().to_rfc3339()
    ));

    debug!("Rendered HTML page ({} bytes)", html.len());
    html
}

/// Metadata lines plus optional category and event-name listings
fn render_header(header: &HeaderSummary) -> String {
    let mut html = String::from("<div id=\"header\">\n");
    for line in header.metadata_lines() {
        html.push_str(&format!("{}<br>\n", escape_html(&line)));
    }
    if let Some(categories) = &header.categories {
        html.push_str("Categories:\n");
        html.push_str(&render_listing(categories));
    }
    if let Some(names) = &header.event_names {
        html.push_str("<br>Event Names:\n");
        html.push_str(&render_listing(names));
    }
    html.push_str("</div>\n");
    html
}

fn render_listing(items: &[String]) -> String {
    let mut html = String::from("<ol>\n");
    for entry in enumerate_listing(items) {
        html.push_str(&format!("<li>{}</li>\n", escape_html(&entry)));
    }
    html.push_str("</ol>\n");
    html
}

/// Event table; the duration cell of a colored row gets that background
fn render_table(table: &EventTable) -> String {
    let mut html = String::from("<table border=\"1\">\n<tr>");
    for header in table.headers() {
        html.push_str(&format!("<td><b>{}</b></td>", escape_html(&header)));
    }
    html.push_str("</tr>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for (column, cell) in table.columns.iter().zip(row.cells(&table.columns)) {
            let cell = escape_html(&cell);
            match row.color.filter(|_| column == DURATION_FIELD) {
                Some(color) => html.push_str(&format!(
                    "<td bgcolor=\"{}\"><font color=\"{}\">{}</font></td>",
                    color, ROW_TEXT_COLOR, cell
                )),
                None => html.push_str(&format!("<td>{}</td>", cell)),
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

/// Write an HTML page to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(html_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    check_extension(output_path, "html");
    write_output(html_content, output_path)
}
