// File: crates/chart-core/src/geometry.rs
// Summary: Computed chart geometry handed to renderers.

use serde::Serialize;

use crate::path::SmoothPath;
use crate::stats::EnergyStats;
use crate::types::Point2D;

/// Everything needed to draw the generation/consumption chart.
///
/// `grid_lines` run bottom to top while `y_axis_labels` run top to bottom, so
/// `y_axis_labels[i]` sits on `grid_lines[len - 1 - i]`.
/// `x_axis_labels[i]` is drawn at `x_label_positions[i]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub generated_points: Vec<Point2D>,
    pub consumed_points: Vec<Point2D>,
    pub generated_path: SmoothPath,
    pub consumed_path: SmoothPath,
    pub grid_lines: Vec<f64>,
    pub y_axis_labels: Vec<String>,
    pub x_axis_labels: Vec<String>,
    pub x_label_positions: Vec<f64>,
    /// Top of the y scale; 0 for an empty series.
    pub max_value: f64,
    pub stats: EnergyStats,
}

impl ChartGeometry {
    pub fn is_empty(&self) -> bool {
        self.generated_points.is_empty()
    }

    /// `(y, label)` pairs for the y axis, top label first.
    pub fn y_axis_ticks(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.grid_lines.iter().rev().copied().zip(self.y_axis_labels.iter().map(String::as_str))
    }
}
