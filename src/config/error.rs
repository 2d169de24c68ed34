//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem with configuration values
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("tick_interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("max_speed must be greater than zero")]
    ZeroTopSpeed,

    #[error("speed_step must be greater than zero")]
    ZeroStep,

    #[error("speed_step ({step}) exceeds max_speed ({max})")]
    StepExceedsTopSpeed { step: u32, max: u32 },
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are out of range
    #[error("invalid config: {}", describe(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn describe(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
