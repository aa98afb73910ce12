// File: crates/chart-core/src/stats.rs
// Summary: Summary statistics over the displayed series window.

use serde::Serialize;

use crate::sample::EnergyDataPoint;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EnergyStats {
    /// Highest generated kWh in the window.
    pub peak_generation: f64,
    /// Mean consumed kWh per sample.
    pub avg_consumption: f64,
    /// Total generated minus total consumed; negative on a deficit.
    pub surplus_energy: f64,
}

/// Round to 2 decimal places using the exact binary value of `v`, so 2.675
/// (stored just below) rounds down. Exact ties round away from zero.
pub fn round2(v: f64) -> f64 {
    let a = v.abs();
    let t = a * 100.0;
    if !t.is_finite() || t >= 4_503_599_627_370_496.0 {
        return v;
    }
    // a * 100 == t + err exactly
    let err = a.mul_add(100.0, -t);
    let lo = t.floor();
    let above_half = (t - (lo + 0.5)) + err;
    let n = if above_half < 0.0 { lo } else { lo + 1.0 };
    (n / 100.0).copysign(v)
}

impl EnergyStats {
    /// All zeros for an empty window.
    pub fn from_samples(data: &[EnergyDataPoint]) -> Self {
        if data.is_empty() {
            return Self::default();
        }
        let peak = data.iter().map(|d| d.generated_kwh).fold(f64::NEG_INFINITY, f64::max);
        let total_generated: f64 = data.iter().map(|d| d.generated_kwh).sum();
        let total_consumed: f64 = data.iter().map(|d| d.consumed_kwh).sum();
        Self {
            peak_generation: round2(peak),
            avg_consumption: round2(total_consumed / data.len() as f64),
            surplus_energy: round2(total_generated - total_consumed),
        }
    }
}
