// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, pixel points).

use serde::{Deserialize, Serialize};

/// Default chart width in pixels.
pub const WIDTH: f64 = 1000.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 400.0;

/// Number of horizontal grid lines (and y-axis labels).
pub const GRID_LINES: usize = 5;
/// Target number of x-axis labels; the sampling stride is `ceil(n / X_LABEL_TARGET)`.
pub const X_LABEL_TARGET: usize = 6;

/// Space reserved around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 60.0)
    }
}

/// Pixel-space coordinate. Origin is top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
