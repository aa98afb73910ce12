// File: crates/chart-core/src/svg.rs
// Summary: Standalone SVG document rendering of a computed ChartGeometry.

use std::fmt::Write as _;

use crate::config::ChartConfig;
use crate::geometry::ChartGeometry;
use crate::path::SmoothPath;
use crate::types::Point2D;

pub const DEFAULT_TITLE: &str = "Energy Generation vs Consumption (24h)";

#[derive(Clone, Debug)]
pub struct SvgOptions {
    pub title: Option<String>,
    pub show_legend: bool,
    /// Peak / average / surplus summary in the plot's top-left corner.
    pub show_stats: bool,
    /// Draw a small circle at every data point.
    pub show_points: bool,
    pub generated_color: String,
    pub consumed_color: String,
    pub grid_color: String,
    pub label_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            show_legend: true,
            show_stats: true,
            show_points: false,
            generated_color: "#f59e0b".into(),
            consumed_color: "#3b82f6".into(),
            grid_color: "#e5e7eb".into(),
            label_color: "#6b7280".into(),
        }
    }
}

/// Render `geometry` as an SVG document sized by `config`.
/// An empty geometry still yields a valid document (frame only, no curves).
pub fn render_svg(geometry: &ChartGeometry, config: &ChartConfig, opts: &SvgOptions) -> String {
    let mut out = String::new();
    write_document(&mut out, geometry, config, opts).expect("writing to a String cannot fail");
    out
}

fn write_document(
    out: &mut String,
    g: &ChartGeometry,
    config: &ChartConfig,
    opts: &SvgOptions,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}">"#,
        config.view_box(),
        config.width,
        config.height
    )?;

    if let Some(title) = &opts.title {
        writeln!(out, "  <title>{}</title>", escape(title))?;
    }

    let (l, r) = (config.plot_left(), config.plot_right());
    writeln!(out, r#"  <g class="grid" stroke="{}" stroke-width="1">"#, escape(&opts.grid_color))?;
    for y in &g.grid_lines {
        writeln!(out, r#"    <line x1="{l}" y1="{y}" x2="{r}" y2="{y}"/>"#)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(
        out,
        r#"  <g class="y-labels" fill="{}" font-size="12" text-anchor="end">"#,
        escape(&opts.label_color)
    )?;
    for (y, label) in g.y_axis_ticks() {
        writeln!(out, r#"    <text x="{}" y="{}">{}</text>"#, l - 10.0, y + 4.0, escape(label))?;
    }
    writeln!(out, "  </g>")?;

    writeln!(
        out,
        r#"  <g class="x-labels" fill="{}" font-size="12" text-anchor="middle">"#,
        escape(&opts.label_color)
    )?;
    let label_y = config.plot_bottom() + 25.0;
    for (x, label) in g.x_label_positions.iter().zip(&g.x_axis_labels) {
        writeln!(out, r#"    <text x="{x}" y="{label_y}">{}</text>"#, escape(label))?;
    }
    writeln!(out, "  </g>")?;

    write_curve(out, "generated", &g.generated_path, &g.generated_points, &opts.generated_color, opts.show_points)?;
    write_curve(out, "consumed", &g.consumed_path, &g.consumed_points, &opts.consumed_color, opts.show_points)?;

    if opts.show_stats && !g.is_empty() {
        write_stats(out, g, config, &opts.label_color)?;
    }

    if opts.show_legend {
        let x = r - 200.0;
        let y = config.plot_top() + 10.0;
        writeln!(out, r#"  <g class="legend" font-size="12">"#)?;
        for (i, (name, color)) in [("Generated", &opts.generated_color), ("Consumed", &opts.consumed_color)]
            .into_iter()
            .enumerate()
        {
            let ix = x + 100.0 * i as f64;
            writeln!(
                out,
                r#"    <rect x="{ix}" y="{}" width="12" height="12" fill="{}"/>"#,
                y - 10.0,
                escape(color)
            )?;
            writeln!(out, r#"    <text x="{}" y="{y}">{name}</text>"#, ix + 18.0)?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

fn write_curve(
    out: &mut String,
    class: &str,
    path: &SmoothPath,
    points: &[Point2D],
    color: &str,
    show_points: bool,
) -> std::fmt::Result {
    if !path.is_empty() {
        writeln!(
            out,
            r#"  <path class="{class}" d="{path}" fill="none" stroke="{}" stroke-width="2"/>"#,
            escape(color)
        )?;
    }
    if show_points {
        for p in points {
            writeln!(out, r#"  <circle class="{class}" cx="{}" cy="{}" r="3" fill="{}"/>"#, p.x, p.y, escape(color))?;
        }
    }
    Ok(())
}

fn write_stats(out: &mut String, g: &ChartGeometry, config: &ChartConfig, color: &str) -> std::fmt::Result {
    let x = config.plot_left() + 10.0;
    let y = config.plot_top() + 15.0;
    let rows = [
        ("Peak Generation", g.stats.peak_generation),
        ("Avg Consumption", g.stats.avg_consumption),
        ("Surplus Energy", g.stats.surplus_energy),
    ];
    writeln!(out, r#"  <g class="stats" fill="{}" font-size="12">"#, escape(color))?;
    for (i, (name, value)) in rows.into_iter().enumerate() {
        writeln!(out, r#"    <text x="{x}" y="{}">{name}: {value} kWh</text>"#, y + 16.0 * i as f64)?;
    }
    writeln!(out, "  </g>")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
