// File: crates/chart-core/src/axis.rs
// Summary: X-axis time labels sampled from the series at a fixed stride.

use crate::sample::EnergyDataPoint;
use crate::scale::IndexScale;
use crate::types::X_LABEL_TARGET;

/// One x-axis label and its pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

/// Sampling stride that keeps the label count near `X_LABEL_TARGET`.
pub fn label_stride(len: usize) -> usize {
    len.div_ceil(X_LABEL_TARGET).max(1)
}

/// `HH:00` for the sample's hour of day.
pub fn hour_label(sample: &EnergyDataPoint) -> String {
    format!("{:02}:00", sample.hour())
}

pub fn x_axis_ticks(data: &[EnergyDataPoint], xs: &IndexScale) -> Vec<AxisTick> {
    if data.is_empty() {
        return Vec::new();
    }
    data.iter()
        .enumerate()
        .step_by(label_stride(data.len()))
        .map(|(index, s)| AxisTick { index, x: xs.to_px(index), label: hour_label(s) })
        .collect()
}
