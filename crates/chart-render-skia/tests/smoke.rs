// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs from computed geometry.

use chart_core::{ChartConfig, ChartGeometryEngine, EnergyDataPoint, Margin};
use chart_render_skia::{render_png_bytes, render_to_png, theme, RenderOptions, Theme};
use chrono::NaiveDate;

fn day() -> Vec<EnergyDataPoint> {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..24u32)
        .map(|h| {
            let sun = ((h as f64 - 6.0) / 12.0 * std::f64::consts::PI).sin().max(0.0);
            EnergyDataPoint::new(d.and_hms_opt(h, 0, 0).unwrap(), sun * 8.0, 1.5, 24.0, sun * 850.0)
        })
        .collect()
}

fn background_pixels(img: &image::RgbaImage, bg: [u8; 3]) -> usize {
    img.pixels().filter(|p| p.0[..3] == bg).count()
}

#[test]
fn render_smoke_png() {
    let config = ChartConfig::default();
    let g = ChartGeometryEngine::new(config).compute(&day());

    let out = std::path::PathBuf::from("target/test_out/energy_smoke.png");
    render_to_png(&g, &config, &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_png_bytes(&g, &config, &RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1000, 400));
}

#[test]
fn curves_paint_over_background() {
    let config = ChartConfig::default();
    let opts = RenderOptions { draw_labels: false, theme: Theme::light(), ..RenderOptions::default() };
    let bg = opts.theme.background;
    let bg = [bg.r(), bg.g(), bg.b()];

    let empty = render_png_bytes(&ChartGeometryEngine::new(config).compute(&[]), &config, &opts).expect("empty");
    let full = render_png_bytes(&ChartGeometryEngine::new(config).compute(&day()), &config, &opts).expect("full");
    let empty = image::load_from_memory(&empty).expect("decode").to_rgba8();
    let full = image::load_from_memory(&full).expect("decode").to_rgba8();

    // corner stays background, curves cover more pixels than axes alone
    assert_eq!(&full.get_pixel(0, 0).0[..3], &bg);
    assert!(background_pixels(&full, bg) < background_pixels(&empty, bg));
}

#[test]
fn surface_follows_config_size() {
    let config = ChartConfig::new(320.0, 180.0, Margin::new(8.0, 8.0, 24.0, 32.0));
    let g = ChartGeometryEngine::new(config).compute(&day());
    let bytes = render_png_bytes(&g, &config, &RenderOptions::default()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (320, 180));
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    assert_eq!(theme::find("LIGHT").name, "light");
    assert_eq!(theme::find("neon").name, "dark");
}
