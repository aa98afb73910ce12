// File: crates/chart-core/src/synth.rs
// Summary: Synthetic production history (hourly day / daily month / monthly year) for demos and tests.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sample::EnergyDataPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Day,
    Month,
    Year,
}

impl Period {
    /// Number of samples in the window.
    pub fn intervals(self) -> usize {
        match self {
            Period::Day => 24,
            Period::Month => 30,
            Period::Year => 12,
        }
    }

    /// Timestamp `steps` intervals before `now`.
    fn step_back(self, now: NaiveDateTime, steps: usize) -> NaiveDateTime {
        match self {
            Period::Day => now - TimeDelta::hours(steps as i64),
            Period::Month => now - TimeDelta::days(steps as i64),
            Period::Year => now.checked_sub_months(Months::new(steps as u32)).unwrap_or(now),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Day => "day",
            Period::Month => "month",
            Period::Year => "year",
        })
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(format!("unknown period '{other}' (expected day, month or year)")),
        }
    }
}

/// Generate `period.intervals()` samples ending one interval before `now`, oldest first.
/// The same `seed` always yields the same series.
pub fn production_history(period: Period, now: NaiveDateTime, seed: u64) -> Vec<EnergyDataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = period.intervals();
    (0..n)
        .map(|i| EnergyDataPoint {
            timestamp: period.step_back(now, n - i),
            generated_kwh: rng.random_range(10.0..30.0),
            consumed_kwh: rng.random_range(5.0..15.0),
            temperature: rng.random_range(25.0..35.0),
            irradiance: rng.random_range(0.0..800.0),
        })
        .collect()
}
