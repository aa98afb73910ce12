// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes energy chart geometry to PNG.

pub mod raster;
pub mod theme;

pub use raster::{render_png_bytes, render_to_png, RenderOptions};
pub use theme::Theme;
