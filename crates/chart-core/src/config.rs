// File: crates/chart-core/src/config.rs
// Summary: Chart dimensions and margins, fixed per chart instance.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{Margin, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Margin::default() }
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self { width, height, margin }
    }

    /// Plot area width: `width - margin.left - margin.right`.
    pub fn chart_width(&self) -> f64 { self.width - self.margin.hsum() }
    /// Plot area height: `height - margin.top - margin.bottom`.
    pub fn chart_height(&self) -> f64 { self.height - self.margin.vsum() }

    /// Left edge of the plot area.
    pub fn plot_left(&self) -> f64 { self.margin.left }
    /// Right edge of the plot area.
    pub fn plot_right(&self) -> f64 { self.width - self.margin.right }
    /// Top edge of the plot area.
    pub fn plot_top(&self) -> f64 { self.margin.top }
    /// Bottom edge of the plot area (the zero line).
    pub fn plot_bottom(&self) -> f64 { self.height - self.margin.bottom }

    /// SVG `viewBox` attribute covering the whole chart.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Reject configurations that leave no drawable plot area.
    pub fn validate(&self) -> Result<()> {
        let m = &self.margin;
        let all = [self.width, self.height, m.top, m.right, m.bottom, m.left];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidDimensions("values must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidDimensions(format!(
                "size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| *v < 0.0) {
            return Err(ChartError::InvalidDimensions("margins must be non-negative".into()));
        }
        if self.chart_width() <= 0.0 || self.chart_height() <= 0.0 {
            return Err(ChartError::InvalidDimensions(format!(
                "margins leave no plot area ({}x{})",
                self.chart_width(),
                self.chart_height()
            )));
        }
        Ok(())
    }
}
