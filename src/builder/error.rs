//! Build errors for the simulation builder.

use crate::config::ConfigIssue;
use crate::core::IntervalTooShort;
use thiserror::Error;

/// Errors that can occur when building a simulation.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid limits: {0:?}")]
    InvalidLimits(Vec<ConfigIssue>),

    #[error(transparent)]
    Cadence(#[from] IntervalTooShort),

    #[error("Initial speed {speed} km/h exceeds max_speed {max} km/h")]
    InitialOutOfRange { speed: u32, max: u32 },

    #[error("Initial distance must be finite and non-negative, got {0}")]
    InvalidDistance(f64),

    #[error("No tokio runtime available. Call .build() from within a runtime")]
    NoRuntime,
}
