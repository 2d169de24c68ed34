//! Builder API for ergonomic simulation construction.
//!
//! ```
//! use roadster::builder::SimulationBuilder;
//! use roadster::core::CarState;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sim = SimulationBuilder::new()
//!     .initial(CarState::new(true, 0))
//!     .tick_interval(Duration::from_millis(100))
//!     .build()
//!     .unwrap();
//!
//! let state = sim.accelerate().unwrap();
//! assert_eq!(state.speed, 5);
//! sim.unmount();
//! # }
//! ```

pub mod error;
pub mod simulation;

pub use error::BuildError;
pub use simulation::SimulationBuilder;
