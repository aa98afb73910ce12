// File: crates/chart-core/src/grid.rs
// Summary: Horizontal grid line and y-axis label layout.

use crate::config::ChartConfig;
use crate::types::GRID_LINES;

/// Grid line y-positions from the plot bottom (zero line) up to the plot top, inclusive.
pub fn grid_lines(config: &ChartConfig) -> Vec<f64> {
    let last = (GRID_LINES - 1) as f64;
    (0..GRID_LINES)
        .map(|i| config.plot_bottom() - (i as f64 / last) * config.chart_height())
        .collect()
}

/// Integer-rounded labels from `max_value` down to 0, one per grid line.
/// Label `i` belongs to `grid_lines[GRID_LINES - 1 - i]`.
pub fn y_axis_labels(max_value: f64) -> Vec<String> {
    let last = (GRID_LINES - 1) as f64;
    (0..GRID_LINES)
        .rev()
        .map(|k| format!("{}", ((k as f64 / last) * max_value).round() as i64))
        .collect()
}
