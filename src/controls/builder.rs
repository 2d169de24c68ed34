//! Builder API for creating control rules.

use super::control::Control;
use super::rules::{ControlCheck, ControlRules};
use super::violations::ControlViolation;
use crate::core::{CarState, Guard};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating control rules
pub struct ControlRulesBuilder {
    max_speed: u32,
    required_checks: Vec<ControlCheck>,
}

impl ControlRulesBuilder {
    /// Start from the built-in rules for a car with the given top speed.
    pub fn new(max_speed: u32) -> Self {
        Self {
            max_speed,
            required_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Control, &CarState) -> Validation<(), NonEmptyVec<ControlViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Control, &CarState) -> bool + Send + Sync + 'static,
    {
        let check = move |control: &Control, state: &CarState| {
            if predicate(control, state) {
                Validation::success(())
            } else {
                Validation::fail(ControlViolation::Custom {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the control rules
    pub fn build(self) -> ControlRules {
        ControlRules {
            max_speed: self.max_speed,
            engine_on: Guard::engine_on(),
            stationary: Guard::stationary(),
            below_top: Guard::below(self.max_speed),
            required_checks: self.required_checks,
        }
    }
}
