//! Pie chart planning.
//!
//! Turns the table's parallel duration/color lists into angular slices.
//! Slices follow row order and start at angle 0 (the positive x axis),
//! sweeping clockwise in screen coordinates.

use crate::aggregator::category::HexColor;
use crate::aggregator::table::EventTable;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_TITLE};
use log::{debug, info};
use serde::Serialize;
use std::f64::consts::{PI, TAU};

/// Tolerance used to detect a slice covering the whole circle
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Shared center and radius for every wedge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl ChartGeometry {
    pub fn from_config(config: &ChartConfig) -> Self {
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: width.min(height) / 2.0,
        }
    }

    /// Point on the circle at `angle` radians
    pub fn point_at(&self, angle: f64) -> (f64, f64) {
        (
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }
}

/// One wedge of the pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub color_hex: String,
    pub start_angle_radians: f64,
    pub sweep_angle_radians: f64,
}

impl PieSlice {
    pub fn end_angle_radians(&self) -> f64 {
        self.start_angle_radians + self.sweep_angle_radians
    }

    /// SVG path data for this wedge: center, out to the arc, around, back
    pub fn wedge_path(&self, geometry: &ChartGeometry) -> String {
        let ChartGeometry {
            center_x: cx,
            center_y: cy,
            radius: r,
        } = *geometry;

        // An arc whose endpoints coincide draws nothing, so split the full circle
        if self.sweep_angle_radians >= TAU - FULL_CIRCLE_EPSILON {
            return format!(
                "M {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3} Z",
                cx - r,
                cy,
                cx + r,
                cy,
                cx - r,
                cy,
                r = r
            );
        }

        let (x0, y0) = geometry.point_at(self.start_angle_radians);
        let (x1, y1) = geometry.point_at(self.end_angle_radians());
        let large_arc = u8::from(self.sweep_angle_radians > PI);

        format!(
            "M {:.3} {:.3} L {:.3} {:.3} A {r:.3} {r:.3} 0 {} 1 {:.3} {:.3} Z",
            cx,
            cy,
            x0,
            y0,
            large_arc,
            x1,
            y1,
            r = r
        )
    }
}

/// Plan pie slices from parallel duration and color lists
///
/// **Public** - main entry point for chart planning
///
/// Each slice sweeps `2π * duration / duration_total`, starting where the
/// previous one ended. A non-positive or non-finite total yields no slices.
pub fn plan_pie_chart(durations: &[f64], colors: &[HexColor], duration_total: f64) -> Vec<PieSlice> {
    if durations.is_empty() {
        return Vec::new();
    }
    if !(duration_total.is_finite() && duration_total > 0.0) {
        info!("Duration total is {}, nothing to chart", duration_total);
        return Vec::new();
    }

    let mut position = 0.0;
    let slices: Vec<PieSlice> = durations
        .iter()
        .zip(colors)
        .map(|(duration, color)| {
            let sweep = TAU * (duration / duration_total);
            let slice = PieSlice {
                color_hex: color.to_string(),
                start_angle_radians: position,
                sweep_angle_radians: sweep,
            };
            position += sweep;
            slice
        })
        .collect();

    debug!("Planned {} pie slices", slices.len());
    slices
}

/// Plan pie slices for a built event table
pub fn plan_from_table(table: &EventTable) -> Vec<PieSlice> {
    plan_pie_chart(&table.durations, &table.colors, table.duration_total)
}
