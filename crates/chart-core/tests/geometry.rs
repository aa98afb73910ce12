// File: crates/chart-core/tests/geometry.rs
// Purpose: Point placement, scale bounds, grid lines and degenerate series.

use chart_core::{ChartConfig, ChartGeometryEngine, EnergyDataPoint, Margin};
use chrono::NaiveDate;

fn sample(hour: u32, generated: f64, consumed: f64) -> EnergyDataPoint {
    let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap();
    EnergyDataPoint::new(ts, generated, consumed, 25.0, 300.0)
}

fn day_profile() -> Vec<EnergyDataPoint> {
    vec![
        sample(6, 0.0, 0.5),
        sample(7, 2.0, 1.0),
        sample(8, 5.0, 1.5),
        sample(12, 8.0, 2.0),
        sample(16, 4.0, 1.8),
        sample(18, 1.0, 2.0),
        sample(20, 0.0, 1.5),
    ]
}

#[test]
fn empty_series_yields_empty_geometry() {
    let g = ChartGeometryEngine::default().compute(&[]);
    assert!(g.is_empty());
    assert_eq!(g.generated_path.to_string(), "");
    assert_eq!(g.consumed_path.to_string(), "");
    assert!(g.consumed_points.is_empty());
    assert_eq!(g.stats.peak_generation, 0.0);
    assert_eq!(g.stats.avg_consumption, 0.0);
    assert_eq!(g.stats.surplus_energy, 0.0);
}

#[test]
fn compute_is_idempotent() {
    let engine = ChartGeometryEngine::default();
    let data = day_profile();
    assert_eq!(engine.compute(&data), engine.compute(&data));
}

#[test]
fn one_point_per_sample() {
    let data = day_profile();
    let g = ChartGeometryEngine::default().compute(&data);
    assert_eq!(g.generated_points.len(), data.len());
    assert_eq!(g.consumed_points.len(), data.len());
}

#[test]
fn points_stay_inside_plot_area() {
    let config = ChartConfig::default();
    let g = ChartGeometryEngine::new(config).compute(&day_profile());
    let eps = 1e-9;
    for p in g.generated_points.iter().chain(&g.consumed_points) {
        assert!(p.x >= config.margin.left - eps && p.x <= config.width - config.margin.right + eps, "x out of range: {p:?}");
        assert!(p.y >= config.margin.top - eps && p.y <= config.height - config.margin.bottom + eps, "y out of range: {p:?}");
    }
}

#[test]
fn placement_matches_default_layout() {
    let g = ChartGeometryEngine::default().compute(&day_profile());
    // max value 8, plot 920x340 starting at (60, 20)
    assert_eq!(g.max_value, 8.0);
    let first = g.generated_points[0];
    assert_eq!((first.x, first.y), (60.0, 360.0));
    let peak = g.generated_points[3];
    assert!((peak.x - 520.0).abs() < 1e-9);
    assert!((peak.y - 20.0).abs() < 1e-9);
    let last = g.consumed_points[6];
    assert!((last.x - 980.0).abs() < 1e-9);
    assert!((last.y - (360.0 - 1.5 / 8.0 * 340.0)).abs() < 1e-9);
}

#[test]
fn grid_lines_and_labels_line_up() {
    let g = ChartGeometryEngine::default().compute(&day_profile());
    // zero line first, like the labels read bottom-up
    assert_eq!(g.grid_lines, vec![360.0, 275.0, 190.0, 105.0, 20.0]);
    assert_eq!(g.y_axis_labels, vec!["8", "6", "4", "2", "0"]);
    let ticks: Vec<(f64, &str)> = g.y_axis_ticks().collect();
    assert_eq!(ticks.first(), Some(&(20.0, "8")));
    assert_eq!(ticks.last(), Some(&(360.0, "0")));
}

#[test]
fn grid_has_five_lines_for_any_length() {
    let engine = ChartGeometryEngine::default();
    for n in [1usize, 2, 7, 24, 100] {
        let data: Vec<_> = (0..n).map(|i| sample((i % 24) as u32, i as f64, 1.0)).collect();
        let g = engine.compute(&data);
        assert_eq!(g.grid_lines.len(), 5, "n={n}");
        assert_eq!(g.y_axis_labels.len(), 5, "n={n}");
    }
}

#[test]
fn all_zero_series_uses_unit_scale() {
    let data = vec![sample(0, 0.0, 0.0), sample(1, 0.0, 0.0)];
    let g = ChartGeometryEngine::default().compute(&data);
    assert_eq!(g.max_value, 1.0);
    assert_eq!(g.y_axis_labels, vec!["1", "1", "1", "0", "0"]);
    assert!(g.generated_points.iter().all(|p| p.y == 360.0));
}

#[test]
fn single_sample_sits_on_left_margin() {
    let g = ChartGeometryEngine::default().compute(&[sample(9, 3.0, 2.0)]);
    assert_eq!(g.generated_points.len(), 1);
    let p = g.generated_points[0];
    assert_eq!(p.x, 60.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert!(g.generated_path.is_empty());
    assert_eq!(g.generated_path.to_string(), "");
    assert_eq!(g.x_axis_labels, vec!["09:00"]);
    assert_eq!(g.stats.peak_generation, 3.0);
}

#[test]
fn negative_values_pass_through() {
    let data = vec![sample(0, -2.0, 1.0), sample(1, 4.0, 0.0)];
    let g = ChartGeometryEngine::default().compute(&data);
    // below the zero line, not clamped
    assert!(g.generated_points[0].y > 360.0);
    assert_eq!(g.stats.surplus_energy, 1.0);
}

#[test]
fn custom_dimensions_are_respected() {
    let config = ChartConfig::new(500.0, 300.0, Margin::new(10.0, 10.0, 30.0, 40.0));
    let engine = ChartGeometryEngine::try_new(config).expect("valid config");
    let g = engine.compute(&[sample(0, 2.0, 1.0), sample(1, 1.0, 2.0)]);
    assert_eq!(g.generated_points[0].x, 40.0);
    assert_eq!(g.generated_points[1].x, 490.0);
    assert_eq!(g.generated_points[0].y, 10.0);
    assert_eq!(g.grid_lines.first(), Some(&270.0));
    assert_eq!(g.grid_lines.last(), Some(&10.0));
}

#[test]
fn input_is_not_mutated() {
    let data = day_profile();
    let copy = data.clone();
    let _ = ChartGeometryEngine::default().compute(&data);
    assert_eq!(data, copy);
}
