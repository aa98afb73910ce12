// File: crates/demo/src/main.rs
// Summary: Demo loads energy samples from CSV (or synthesizes a day/month/year series),
// computes chart geometry and writes SVG + PNG renderings.

use anyhow::{Context, Result};
use chart_core::{
    production_history, render_svg, validate_series, ChartConfig, ChartGeometryEngine, EnergyDataPoint, Period,
    SvgOptions,
};
use chart_render_skia::{render_to_png, theme, RenderOptions};
use chrono::{DateTime, NaiveDateTime};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "energy-chart", about = "Render a solar generation vs consumption chart")]
struct Args {
    /// CSV with columns timestamp,generated_kwh,consumed_kwh[,temperature,irradiance]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Synthetic window when no input is given
    #[arg(short, long, default_value = "day")]
    period: Period,

    /// Seed for the synthetic series (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Chart config file (toml/json/yaml); ENERGY_CHART_* env vars override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// PNG theme (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Chart title
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_chart_config(args.config.as_deref())?;
    let engine = ChartGeometryEngine::try_new(config).context("invalid chart configuration")?;

    let data = match &args.input {
        Some(path) => {
            let data = load_energy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(path = %path.display(), samples = data.len(), "loaded samples");
            data
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            let now = chrono::Local::now().naive_local();
            info!(period = %args.period, seed, "generating synthetic series");
            production_history(args.period, now, seed)
        }
    };

    if let Err(e) = validate_series(&data) {
        warn!(error = %e, "input failed validation; charting as-is");
    }

    let geometry = engine.compute(&data);
    info!(
        peak_generation = geometry.stats.peak_generation,
        avg_consumption = geometry.stats.avg_consumption,
        surplus_energy = geometry.stats.surplus_energy,
        "chart statistics"
    );

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    let mut svg_opts = SvgOptions::default();
    if let Some(title) = args.title {
        svg_opts.title = Some(title);
    }
    let svg_path = args.out.join("energy_chart.svg");
    std::fs::write(&svg_path, render_svg(&geometry, &config, &svg_opts))
        .with_context(|| format!("writing {}", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote SVG");

    let png_path = args.out.join("energy_chart.png");
    let render_opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    render_to_png(&geometry, &config, &render_opts, &png_path)?;
    info!(path = %png_path.display(), "wrote PNG");

    Ok(())
}

/// Defaults, then the optional file, then `ENERGY_CHART_*` variables
/// (nested keys use `__`, e.g. `ENERGY_CHART_MARGIN__LEFT=80`).
fn load_chart_config(path: Option<&Path>) -> Result<ChartConfig> {
    let mut builder = config::Config::builder();
    if let Some(p) = path {
        builder = builder.add_source(config::File::from(p));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix("ENERGY_CHART")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("reading chart config")?;
    Ok(settings.try_deserialize()?)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: String,
    generated_kwh: f64,
    consumed_kwh: f64,
    #[serde(default)]
    temperature: f64,
    #[serde(default)]
    irradiance: f64,
}

fn load_energy_csv(path: &Path) -> Result<Vec<EnergyDataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = rec.with_context(|| format!("row {}", i + 1))?;
        let timestamp = parse_timestamp(&row.timestamp)
            .with_context(|| format!("row {}: unrecognised timestamp '{}'", i + 1, row.timestamp))?;
        out.push(EnergyDataPoint::new(timestamp, row.generated_kwh, row.consumed_kwh, row.temperature, row.irradiance));
    }
    Ok(out)
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the `T`-separated form, or RFC 3339 (kept in its own offset).
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
