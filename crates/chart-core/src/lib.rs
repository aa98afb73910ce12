// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart geometry engine and its data model.

pub mod axis;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod sample;
pub mod scale;
pub mod stats;
pub mod svg;
pub mod synth;
pub mod types;

pub use config::ChartConfig;
pub use engine::ChartGeometryEngine;
pub use error::ChartError;
pub use geometry::ChartGeometry;
pub use path::{PathCommand, SmoothPath};
pub use sample::{validate_series, EnergyDataPoint};
pub use stats::EnergyStats;
pub use svg::{render_svg, SvgOptions};
pub use synth::{production_history, Period};
pub use types::{Margin, Point2D};
