//! Simulation configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults of the
//! reducer (100 ms ticks, 200 km/h top speed, 5 km/h steps).
//!
//! ```toml
//! tick_interval_ms = 100
//! max_speed = 200
//! speed_step = 5
//! ```

use crate::core::{
    CarReducer, IntervalTooShort, DEFAULT_MAX_SPEED, DEFAULT_SPEED_STEP, DEFAULT_TICK_INTERVAL,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigIssue};

/// Tunables for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Driver cadence in milliseconds
    pub tick_interval_ms: u64,
    /// Top speed in km/h
    pub max_speed: u32,
    /// Speed change per accelerate/brake press in km/h
    pub speed_step: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            max_speed: DEFAULT_MAX_SPEED,
            speed_step: DEFAULT_SPEED_STEP,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reducer using these limits and this cadence.
    pub fn reducer(&self) -> Result<CarReducer, IntervalTooShort> {
        CarReducer::new(self.max_speed, self.speed_step, self.tick_interval())
    }

    /// Check every value, accumulating ALL issues.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        checks.push(require(self.tick_interval_ms > 0, ConfigIssue::ZeroInterval));
        checks.push(require(self.max_speed > 0, ConfigIssue::ZeroTopSpeed));
        checks.push(require(self.speed_step > 0, ConfigIssue::ZeroStep));
        checks.push(require(
            self.speed_step <= self.max_speed,
            ConfigIssue::StepExceedsTopSpeed {
                step: self.speed_step,
                max: self.max_speed,
            },
        ));

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every issue found by [`check`](Self::check); empty when valid.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        match self.check() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(issues) => issues.iter().cloned().collect(),
        }
    }

    /// [`check`](Self::check) as a `Result`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

fn require(passes: bool, issue: ConfigIssue) -> Validation<(), NonEmptyVec<ConfigIssue>> {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(issue)
    }
}
