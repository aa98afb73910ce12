// File: crates/chart-core/src/sample.rs
// Summary: Energy sample model (one timestamped generation/consumption reading).
// Notes:
// - `compute` accepts samples as-is; the checked constructor and
//   `validate_series` are for callers that want to reject bad input up front.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyDataPoint {
    /// Wall-clock time of the reading.
    pub timestamp: NaiveDateTime,
    pub generated_kwh: f64,
    pub consumed_kwh: f64,
    /// Ambient temperature, degrees Celsius.
    pub temperature: f64,
    /// Solar irradiance, W/m².
    pub irradiance: f64,
}

impl EnergyDataPoint {
    pub fn new(
        timestamp: NaiveDateTime,
        generated_kwh: f64,
        consumed_kwh: f64,
        temperature: f64,
        irradiance: f64,
    ) -> Self {
        Self { timestamp, generated_kwh, consumed_kwh, temperature, irradiance }
    }

    /// Construct a sample enforcing finite, non-negative energy and irradiance.
    pub fn try_new(
        timestamp: NaiveDateTime,
        generated_kwh: f64,
        consumed_kwh: f64,
        temperature: f64,
        irradiance: f64,
    ) -> Result<Self> {
        let s = Self::new(timestamp, generated_kwh, consumed_kwh, temperature, irradiance);
        s.check()?;
        Ok(s)
    }

    /// Hour of day (0..=23) of the reading.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    fn check(&self) -> Result<()> {
        let fail = |reason| Err(ChartError::InvalidSample { timestamp: self.timestamp, reason });
        if !self.generated_kwh.is_finite() || self.generated_kwh < 0.0 {
            return fail("generated kWh must be finite and non-negative");
        }
        if !self.consumed_kwh.is_finite() || self.consumed_kwh < 0.0 {
            return fail("consumed kWh must be finite and non-negative");
        }
        if !self.irradiance.is_finite() || self.irradiance < 0.0 {
            return fail("irradiance must be finite and non-negative");
        }
        if !self.temperature.is_finite() {
            return fail("temperature must be finite");
        }
        Ok(())
    }
}

/// Check every sample and that timestamps never go backwards.
/// Equal consecutive timestamps are allowed.
pub fn validate_series(data: &[EnergyDataPoint]) -> Result<()> {
    for (i, s) in data.iter().enumerate() {
        s.check()?;
        if i > 0 {
            let previous = data[i - 1].timestamp;
            if s.timestamp < previous {
                return Err(ChartError::NonMonotonicTimestamps { index: i, previous, current: s.timestamp });
            }
        }
    }
    Ok(())
}
