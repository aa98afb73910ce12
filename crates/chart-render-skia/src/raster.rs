// File: crates/chart-render-skia/src/raster.rs
// Summary: Headless PNG rendering of ChartGeometry using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use chart_core::{ChartConfig, ChartGeometry, PathCommand, SmoothPath};

use crate::theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub stroke_width: f32,
    pub label_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            draw_labels: true,
            stroke_width: 2.0,
            label_size: 12.0,
        }
    }
}

/// Rasterize `geometry` to PNG bytes on a `config.width` x `config.height` surface.
pub fn render_png_bytes(geometry: &ChartGeometry, config: &ChartConfig, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (w, h) = (config.width.ceil() as i32, config.height.ceil() as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    draw_grid(canvas, geometry, config, &opts.theme);
    draw_axes(canvas, config, &opts.theme);
    if opts.draw_labels {
        draw_labels(canvas, geometry, config, opts);
    }
    draw_curve(canvas, &geometry.consumed_path, opts.theme.consumed_stroke, opts.stroke_width);
    draw_curve(canvas, &geometry.generated_path, opts.theme.generated_stroke, opts.stroke_width);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    tracing::debug!(width = w, height = h, bytes = data.as_bytes().len(), "rendered chart PNG");
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    geometry: &ChartGeometry,
    config: &ChartConfig,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_png_bytes(geometry, config, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, g: &ChartGeometry, config: &ChartConfig, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, r) = (config.plot_left() as f32, config.plot_right() as f32);
    for &y in &g.grid_lines {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, config: &ChartConfig, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    let (l, r) = (config.plot_left() as f32, config.plot_right() as f32);
    let (t, b) = (config.plot_top() as f32, config.plot_bottom() as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_labels(canvas: &skia::Canvas, g: &ChartGeometry, config: &ChartConfig, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.axis_label);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(opts.label_size);

    // y labels right-aligned against the plot's left edge
    let l = config.plot_left() as f32;
    for (y, label) in g.y_axis_ticks() {
        let (w, _) = font.measure_str(label, Some(&paint));
        canvas.draw_str(label, (l - 10.0 - w, y as f32 + opts.label_size * 0.35), &font, &paint);
    }

    // x labels centred under their sample
    let baseline = config.plot_bottom() as f32 + 25.0;
    for (x, label) in g.x_label_positions.iter().zip(&g.x_axis_labels) {
        let (w, _) = font.measure_str(label, Some(&paint));
        canvas.draw_str(label, (*x as f32 - w * 0.5, baseline), &font, &paint);
    }
}

fn draw_curve(canvas: &skia::Canvas, path: &SmoothPath, color: skia::Color, width: f32) {
    if path.is_empty() {
        return;
    }
    let mut sk_path = skia::PathBuilder::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                sk_path.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::CubicTo { c1, c2, to } => {
                sk_path.cubic_to(
                    (c1.x as f32, c1.y as f32),
                    (c2.x as f32, c2.y as f32),
                    (to.x as f32, to.y as f32),
                );
            }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);

    canvas.draw_path(&sk_path.detach(), &stroke);
}
