//! Gated dashboard controls.
//!
//! Controls are the user-facing inputs of the simulation: the engine
//! toggle and the speed controls. Each control is enabled or disabled by
//! rules evaluated against the current state, using Stillwater's
//! `Validation` type to report ALL reasons a control is disabled instead
//! of only the first one.
//!
//! # Example
//!
//! ```rust
//! use roadster::controls::{Control, ControlRulesBuilder, ControlViolation};
//! use roadster::core::CarState;
//! use stillwater::validation::Validation;
//!
//! let rules = ControlRulesBuilder::new(200).build();
//!
//! // Braking with the engine off at rest fails for two reasons.
//! match rules.check(&Control::brake(5), &CarState::default()) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod control;
pub mod panel;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::ControlRulesBuilder;
pub use control::Control;
pub use panel::ControlPanel;
pub use rules::ControlRules;
pub use violations::{ControlError, ControlViolation};
