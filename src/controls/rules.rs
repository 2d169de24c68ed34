//! Enablement rules for dashboard controls using Validation.

use super::control::Control;
use super::violations::ControlViolation;
use crate::core::{CarState, Guard};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom control checks
pub type ControlCheck =
    Box<dyn Fn(&Control, &CarState) -> Validation<(), NonEmptyVec<ControlViolation>> + Send + Sync>;

/// Rules deciding whether a control is enabled.
/// Uses Validation to accumulate ALL violations.
pub struct ControlRules {
    pub(crate) max_speed: u32,
    pub(crate) engine_on: Guard,
    pub(crate) stationary: Guard,
    pub(crate) below_top: Guard,
    pub(crate) required_checks: Vec<ControlCheck>,
}

impl ControlRules {
    /// Check every rule for `control` in `state`.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn check(
        &self,
        control: &Control,
        state: &CarState,
    ) -> Validation<(), NonEmptyVec<ControlViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ControlViolation>>> = Vec::new();

        match *control {
            Control::Toggle => {
                checks.push(require(
                    self.stationary.check(state),
                    ControlViolation::Moving { speed: state.speed },
                ));
            }
            Control::Speed { delta } if delta > 0 => {
                checks.push(require(
                    self.engine_on.check(state),
                    ControlViolation::EngineOff,
                ));
                checks.push(require(
                    self.below_top.check(state),
                    ControlViolation::AtTopSpeed {
                        max: self.max_speed,
                    },
                ));
            }
            Control::Speed { delta } if delta < 0 => {
                checks.push(require(
                    self.engine_on.check(state),
                    ControlViolation::EngineOff,
                ));
                checks.push(require(
                    !self.stationary.check(state),
                    ControlViolation::Stationary,
                ));
            }
            Control::Speed { .. } => {
                checks.push(Validation::fail(ControlViolation::NoChange));
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(control, state));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }
}

fn require(
    passes: bool,
    violation: ControlViolation,
) -> Validation<(), NonEmptyVec<ControlViolation>> {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
