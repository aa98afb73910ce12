// File: crates/chart-core/src/engine.rs
// Summary: ChartGeometryEngine; maps an energy time series to plot geometry and statistics.

use crate::axis::x_axis_ticks;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::ChartGeometry;
use crate::grid::{grid_lines, y_axis_labels};
use crate::path::SmoothPath;
use crate::sample::EnergyDataPoint;
use crate::scale::{IndexScale, ValueScale};
use crate::stats::EnergyStats;
use crate::types::Point2D;

/// Stateless apart from its configuration; every `compute` starts from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartGeometryEngine {
    config: ChartConfig,
}

impl ChartGeometryEngine {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Like `new`, but rejects configs without a drawable plot area.
    pub fn try_new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn compute(&self, data: &[EnergyDataPoint]) -> ChartGeometry {
        if data.is_empty() {
            tracing::debug!("empty series, returning empty geometry");
            return ChartGeometry::default();
        }

        let generated: Vec<f64> = data.iter().map(|d| d.generated_kwh).collect();
        let consumed: Vec<f64> = data.iter().map(|d| d.consumed_kwh).collect();
        let max_value = series_max(&generated).max(series_max(&consumed));

        let xs = IndexScale::new(&self.config, data.len());
        let ys = ValueScale::new(&self.config, max_value);

        let generated_points = place_points(&generated, &xs, &ys);
        let consumed_points = place_points(&consumed, &xs, &ys);
        let generated_path = SmoothPath::through(&generated_points);
        let consumed_path = SmoothPath::through(&consumed_points);

        let ticks = x_axis_ticks(data, &xs);
        let stats = EnergyStats::from_samples(data);

        tracing::debug!(
            samples = data.len(),
            max_value,
            peak = stats.peak_generation,
            surplus = stats.surplus_energy,
            "computed chart geometry"
        );

        ChartGeometry {
            generated_points,
            consumed_points,
            generated_path,
            consumed_path,
            grid_lines: grid_lines(&self.config),
            y_axis_labels: y_axis_labels(max_value),
            x_label_positions: ticks.iter().map(|t| t.x).collect(),
            x_axis_labels: ticks.into_iter().map(|t| t.label).collect(),
            max_value,
            stats,
        }
    }
}

/// Series maximum with a floor of 1 so an all-zero series still has a scale.
fn series_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

fn place_points(values: &[f64], xs: &IndexScale, ys: &ValueScale) -> Vec<Point2D> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point2D::new(xs.to_px(i), ys.to_px(v)))
        .collect()
}
