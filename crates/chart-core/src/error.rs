// File: crates/chart-core/src/error.rs
// Summary: Error type for configuration and optional input validation.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid chart dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid sample at {timestamp}: {reason}")]
    InvalidSample {
        timestamp: NaiveDateTime,
        reason: &'static str,
    },

    #[error("timestamps go backwards at index {index} ({previous} > {current})")]
    NonMonotonicTimestamps {
        index: usize,
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
