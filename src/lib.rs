//! Roadster: a pure functional car simulation
//!
//! Roadster models a small dashboard car: an engine toggle, accelerate and
//! brake controls, a speed readout and a distance odometer fed by a
//! periodic timer. It follows the "pure core, imperative shell" philosophy:
//! every state change goes through one pure reducer, and everything with a
//! lifecycle lives in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **CarState**: the single value describing the car, replaced whole on every change
//! - **Action**: a tagged request to change state, including the time-driven `Tick`
//! - **Reducer**: pure `(state, action) -> state`, total and clamped
//! - **Controls**: user inputs gated by rules that accumulate every violation
//! - **Simulation**: the mounted component owning the state and a cancellable tick loop
//!
//! # Example
//!
//! ```rust
//! use roadster::core::{reduce, Action, CarState};
//!
//! let state = CarState::default();
//! let state = reduce(&state, &Action::ToggleStarted);
//! let state = reduce(&state, &Action::ChangeSpeed(5));
//! let state = reduce(&state, &Action::ChangeSpeed(5));
//! assert_eq!(state.speed, 10);
//!
//! let state = reduce(&state, &Action::Tick);
//! assert_eq!(state.distance, 10.0 / 36000.0);
//! ```

pub mod builder;
pub mod config;
pub mod controls;
pub mod core;
pub mod driver;
pub mod instrument;

// Re-export commonly used types
pub use builder::SimulationBuilder;
pub use config::SimConfig;
pub use controls::{Control, ControlPanel};
pub use self::core::{reduce, Action, CarReducer, CarState, Telemetry};
pub use driver::Simulation;
