//! Core car state types and logic.
//!
//! This module contains the pure functional core of the simulation:
//! - The `CarState` value and its projections
//! - The `Action` vocabulary
//! - The reducer that maps `(state, action)` to the next state
//! - Guard predicates used to gate controls
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod guard;
mod reducer;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use reducer::{
    reduce, CarReducer, IntervalTooShort, DEFAULT_MAX_SPEED, DEFAULT_SPEED_STEP, DEFAULT_TICK_INTERVAL,
};
pub use state::{CarState, Phase, Telemetry};
