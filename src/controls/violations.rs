//! Control violations and the error returned for a disabled control.

use super::control::Control;
use thiserror::Error;

/// Reasons a control is disabled in the current state
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ControlViolation {
    #[error("engine is off")]
    EngineOff,

    #[error("car is moving at {speed} km/h")]
    Moving { speed: u32 },

    #[error("already at top speed ({max} km/h)")]
    AtTopSpeed { max: u32 },

    #[error("car is stationary")]
    Stationary,

    #[error("speed change of zero")]
    NoChange,

    #[error("custom check failed: {message}")]
    Custom { message: String },
}

/// Errors returned when pressing a control
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ControlError {
    #[error("{control} is disabled: {}", describe(.violations))]
    Disabled {
        control: Control,
        violations: Vec<ControlViolation>,
    },
}

impl ControlError {
    /// All reasons the control was rejected.
    pub fn violations(&self) -> &[ControlViolation] {
        match self {
            Self::Disabled { violations, .. } => violations,
        }
    }
}

fn describe(violations: &[ControlViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_error_lists_every_violation() {
        let err = ControlError::Disabled {
            control: Control::brake(5),
            violations: vec![ControlViolation::EngineOff, ControlViolation::Stationary],
        };

        assert_eq!(
            err.to_string(),
            "brake (-5) is disabled: engine is off, car is stationary"
        );
        assert_eq!(err.violations().len(), 2);
    }
}
