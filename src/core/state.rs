//! Car state value and its read-only projections.
//!
//! `CarState` is a plain value: every transition produces a new one and the
//! old value is never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete state of the simulated car.
///
/// # Example
///
/// ```rust
/// use roadster::core::{CarState, Phase};
///
/// let state = CarState::default();
/// assert!(!state.started);
/// assert_eq!(state.speed, 0);
/// assert_eq!(state.distance, 0.0);
/// assert_eq!(state.phase(), Phase::Off);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    /// Engine running flag
    pub started: bool,
    /// Current speed in km/h
    pub speed: u32,
    /// Distance travelled in km
    pub distance: f64,
}

impl CarState {
    /// Create a state with the given engine flag and speed and no distance.
    pub fn new(started: bool, speed: u32) -> Self {
        Self {
            started,
            speed,
            distance: 0.0,
        }
    }

    /// Classify the state (pure).
    pub fn phase(&self) -> Phase {
        if self.speed > 0 {
            Phase::Moving
        } else if self.started {
            Phase::Idling
        } else {
            Phase::Off
        }
    }

    /// Whether the car is stationary.
    pub fn is_stationary(&self) -> bool {
        self.speed == 0
    }

    /// Project the state for display layers.
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            started: self.started,
            speed: self.speed,
            distance: self.distance,
        }
    }
}

/// Coarse classification of a [`CarState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Engine off, stationary
    Off,
    /// Engine on, stationary
    Idling,
    /// Speed above zero
    Moving,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Idling => "Idling",
            Self::Moving => "Moving",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only projection handed to display layers.
///
/// `Display` renders the dashboard line with the distance rounded to two
/// decimals.
///
/// ```rust
/// use roadster::core::CarState;
///
/// let state = CarState { started: true, speed: 10, distance: 0.126 };
/// assert_eq!(state.telemetry().to_string(), "Engine on | 10 km/h | 0.13 km");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub started: bool,
    pub speed: u32,
    pub distance: f64,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.started {
            "Engine on"
        } else {
            "Engine off"
        };
        write!(
            f,
            "{} | {} km/h | {:.2} km",
            status, self.speed, self.distance
        )
    }
}
