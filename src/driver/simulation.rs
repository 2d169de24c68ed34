//! A mounted car simulation: state holder, driver loop and controls.

use super::store::Store;
use super::ticker::{TickerHandle, TickerState};
use crate::builder::{BuildError, SimulationBuilder};
use crate::config::SimConfig;
use crate::controls::{Control, ControlError, ControlPanel};
use crate::core::{Action, CarState, Telemetry};
use crate::instrument::Instrument;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

/// The simulation component.
///
/// Mounting starts the driver loop; unmounting (or dropping) stops it
/// exactly once. User presses and ticks funnel into the same store.
pub struct Simulation {
    store: Arc<Store>,
    panel: ControlPanel,
    ticker: TickerHandle,
}

impl Simulation {
    pub(crate) fn from_parts(store: Arc<Store>, panel: ControlPanel, ticker: TickerHandle) -> Self {
        info!(driver = %ticker.id(), "simulation mounted");
        Self {
            store,
            panel,
            ticker,
        }
    }

    /// Mount a parked car configured by `config`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn mount(config: &SimConfig, instrument: Arc<dyn Instrument>) -> Result<Self, BuildError> {
        SimulationBuilder::new()
            .config(config)
            .instrument(instrument)
            .build()
    }

    /// Press a control. Disabled controls leave the state untouched.
    pub fn press(&self, control: Control) -> Result<CarState, ControlError> {
        self.store
            .try_dispatch(|state| self.panel.press(control, state))
    }

    /// Press the toggle control.
    pub fn toggle(&self) -> Result<CarState, ControlError> {
        self.press(Control::Toggle)
    }

    /// Press the accelerate control.
    pub fn accelerate(&self) -> Result<CarState, ControlError> {
        self.press(self.panel.accelerate())
    }

    /// Press the brake control.
    pub fn brake(&self) -> Result<CarState, ControlError> {
        self.press(self.panel.brake())
    }

    /// Dispatch an action directly, bypassing the control panel.
    pub fn dispatch(&self, action: Action) -> CarState {
        self.store.dispatch(action)
    }

    pub fn state(&self) -> CarState {
        self.store.snapshot()
    }

    pub fn telemetry(&self) -> Telemetry {
        self.store.telemetry()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarState> {
        self.store.subscribe()
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Whether `control` is currently enabled.
    pub fn is_enabled(&self, control: Control) -> bool {
        self.panel.is_enabled(control, &self.state())
    }

    /// Id of the driver loop feeding this simulation.
    pub fn driver_id(&self) -> Uuid {
        self.ticker.id()
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.state() == TickerState::Running
    }

    /// Stop the driver loop and return the final state.
    pub fn unmount(mut self) -> CarState {
        self.ticker.stop();
        let state = self.store.snapshot();
        info!(
            driver = %self.ticker.id(),
            distance = state.distance,
            "simulation unmounted"
        );
        state
    }
}
