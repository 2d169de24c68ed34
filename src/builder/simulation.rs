//! Builder for mounting simulations.

use crate::builder::error::BuildError;
use crate::config::SimConfig;
use crate::controls::{ControlPanel, ControlRules, ControlRulesBuilder};
use crate::core::CarState;
use crate::driver::{Simulation, Store, Ticker};
use crate::instrument::{Instrument, NoopInstrument};
use std::sync::Arc;
use std::time::Duration;

/// Builder for mounting a simulation with a fluent API.
pub struct SimulationBuilder {
    initial: CarState,
    config: SimConfig,
    instrument: Option<Arc<dyn Instrument>>,
    rules: Option<ControlRules>,
}

impl SimulationBuilder {
    /// Create a builder for a parked car with default limits.
    pub fn new() -> Self {
        Self {
            initial: CarState::default(),
            config: SimConfig::default(),
            instrument: None,
            rules: None,
        }
    }

    /// Set the state the car is mounted in.
    pub fn initial(mut self, state: CarState) -> Self {
        self.initial = state;
        self
    }

    /// Take all limits from a config.
    pub fn config(mut self, config: &SimConfig) -> Self {
        self.config = config.clone();
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn max_speed(mut self, max_speed: u32) -> Self {
        self.config.max_speed = max_speed;
        self
    }

    pub fn speed_step(mut self, step: u32) -> Self {
        self.config.speed_step = step;
        self
    }

    /// Observe ticks with `instrument` (defaults to a no-op).
    pub fn instrument(mut self, instrument: Arc<dyn Instrument>) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Replace the built-in control rules.
    pub fn rules(mut self, rules: ControlRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Validate, then mount: create the store and start the driver loop.
    pub fn build(self) -> Result<Simulation, BuildError> {
        let issues = self.config.issues();
        if !issues.is_empty() {
            return Err(BuildError::InvalidLimits(issues));
        }

        if self.initial.speed > self.config.max_speed {
            return Err(BuildError::InitialOutOfRange {
                speed: self.initial.speed,
                max: self.config.max_speed,
            });
        }

        let distance = self.initial.distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(BuildError::InvalidDistance(distance));
        }

        if tokio::runtime::Handle::try_current().is_err() {
            return Err(BuildError::NoRuntime);
        }

        let reducer = self.config.reducer()?;
        let rules = self
            .rules
            .unwrap_or_else(|| ControlRulesBuilder::new(reducer.max_speed()).build());
        let panel = ControlPanel::new(rules, reducer.step());
        let instrument = self.instrument.unwrap_or_else(|| Arc::new(NoopInstrument));

        let store = Arc::new(Store::new(reducer, self.initial));
        let ticker = Ticker::new(Arc::clone(&store), instrument).start();

        Ok(Simulation::from_parts(store, panel, ticker))
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
