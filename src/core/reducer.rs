//! The car reducer: the sole place where car state changes.
//!
//! Every transition is total. Numeric results are clamped into range after
//! the arithmetic, so no input can produce an out-of-range state and there
//! is no error path.

use super::action::Action;
use super::state::CarState;
use std::time::Duration;
use thiserror::Error;

/// Default top speed in km/h.
pub const DEFAULT_MAX_SPEED: u32 = 200;

/// Default speed change per accelerate/brake press in km/h.
pub const DEFAULT_SPEED_STEP: u32 = 5;

/// Default driver cadence.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Tick interval shorter than one millisecond.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("tick interval must be at least 1 ms, got {0:?}")]
pub struct IntervalTooShort(pub Duration);

/// Reducer with its speed limits and tick cadence.
///
/// The cadence sets both how often the driver loop fires and how much
/// distance a single `Tick` accrues: `speed / ticks_per_hour` km, which is
/// `speed / 36000` for the default 100 ms interval.
///
/// # Example
///
/// ```rust
/// use roadster::core::{Action, CarReducer, CarState};
///
/// let reducer = CarReducer::default();
/// let state = reducer.reduce(&CarState::new(true, 195), &Action::Accelerate);
/// assert_eq!(state.speed, 200);
///
/// let state = reducer.reduce(&state, &Action::Accelerate);
/// assert_eq!(state.speed, 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarReducer {
    max_speed: u32,
    step: u32,
    tick_interval: Duration,
    ticks_per_hour: f64,
}

impl Default for CarReducer {
    fn default() -> Self {
        Self::with_cadence(DEFAULT_MAX_SPEED, DEFAULT_SPEED_STEP, DEFAULT_TICK_INTERVAL)
    }
}

impl CarReducer {
    /// Create a reducer with explicit limits.
    ///
    /// Fails when `tick_interval` is under one millisecond.
    pub fn new(
        max_speed: u32,
        step: u32,
        tick_interval: Duration,
    ) -> Result<Self, IntervalTooShort> {
        if tick_interval.as_millis() == 0 {
            return Err(IntervalTooShort(tick_interval));
        }
        Ok(Self::with_cadence(max_speed, step, tick_interval))
    }

    // `tick_interval` is at least 1 ms here.
    fn with_cadence(max_speed: u32, step: u32, tick_interval: Duration) -> Self {
        Self {
            max_speed,
            step,
            tick_interval,
            ticks_per_hour: MILLIS_PER_HOUR / tick_interval.as_millis() as f64,
        }
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Cadence of the driver loop feeding this reducer.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Number of ticks that make up one hour at this cadence.
    pub fn ticks_per_hour(&self) -> f64 {
        self.ticks_per_hour
    }

    /// Compute the next state (pure).
    pub fn reduce(&self, state: &CarState, action: &Action) -> CarState {
        match *action {
            Action::ToggleStarted => CarState {
                started: !state.started,
                ..*state
            },
            Action::EngineOn => CarState {
                started: true,
                ..*state
            },
            Action::EngineStop => CarState {
                started: false,
                speed: 0,
                ..*state
            },
            Action::Accelerate => self.change_speed(state, i64::from(self.step)),
            Action::Brake => self.change_speed(state, -i64::from(self.step)),
            Action::ChangeSpeed(delta) => self.change_speed(state, i64::from(delta)),
            Action::Tick => self.accrue(state),
            Action::Unknown => *state,
        }
    }

    fn change_speed(&self, state: &CarState, delta: i64) -> CarState {
        let speed = (i64::from(state.speed) + delta).clamp(0, i64::from(self.max_speed));
        CarState {
            // Clamped into 0..=max_speed above, so it fits in u32.
            speed: speed as u32,
            ..*state
        }
    }

    fn accrue(&self, state: &CarState) -> CarState {
        CarState {
            distance: state.distance + f64::from(state.speed) / self.ticks_per_hour,
            ..*state
        }
    }
}

/// Reduce with the default limits.
///
/// ```rust
/// use roadster::core::{reduce, Action, CarState};
///
/// let state = reduce(&CarState::new(true, 36), &Action::Tick);
/// assert_eq!(state.distance, 36.0 / 36000.0);
/// ```
pub fn reduce(state: &CarState, action: &Action) -> CarState {
    CarReducer::default().reduce(state, action)
}
