//! Imperative shell around the pure reducer.
//!
//! This module owns everything with a lifecycle:
//! - `Store`: the single state value, replaced whole on every dispatch
//! - `Ticker`: the periodic loop dispatching `Tick`, cancellable exactly once
//! - `Simulation`: the mounted component tying store, loop and controls together

mod simulation;
mod store;
mod ticker;

pub use simulation::Simulation;
pub use store::Store;
pub use ticker::{Ticker, TickerHandle, TickerState};
