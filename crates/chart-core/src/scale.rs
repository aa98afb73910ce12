// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms into plot pixels.

use crate::config::ChartConfig;

/// Horizontal scale spreading `len` samples evenly across the plot width.
/// The first sample lands on the left edge, the last on the right edge.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub width_px: f64,
    pub len: usize,
}

impl IndexScale {
    pub fn new(config: &ChartConfig, len: usize) -> Self {
        Self { left_px: config.plot_left(), width_px: config.chart_width(), len }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        // A lone sample has no span to spread over; pin it to the left edge.
        if self.len < 2 {
            return self.left_px;
        }
        self.left_px + (index as f64 / (self.len - 1) as f64) * self.width_px
    }
}

/// Vertical linear scale mapping `0..=vmax` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub bottom_px: f64,
    pub height_px: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// `vmax` is expected to be at least 1; callers apply that floor.
    pub fn new(config: &ChartConfig, vmax: f64) -> Self {
        Self { bottom_px: config.plot_bottom(), height_px: config.chart_height(), vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - (v / self.vmax) * self.height_px
    }
}
