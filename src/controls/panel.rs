//! Dashboard control panel: turns presses into gated actions.

use super::builder::ControlRulesBuilder;
use super::control::Control;
use super::rules::ControlRules;
use super::violations::ControlError;
use crate::core::{Action, CarReducer, CarState};
use stillwater::validation::Validation;
use tracing::debug;

/// Maps controls to actions, rejecting disabled ones.
///
/// The reducer accepts every action; gating lives here, the same way a
/// disabled button never fires its handler.
///
/// # Example
///
/// ```rust
/// use roadster::controls::{Control, ControlPanel};
/// use roadster::core::{Action, CarState};
///
/// let panel = ControlPanel::default();
///
/// let action = panel.press(Control::Toggle, &CarState::default()).unwrap();
/// assert_eq!(action, Action::ToggleStarted);
///
/// assert!(panel.press(Control::Toggle, &CarState::new(true, 40)).is_err());
/// ```
pub struct ControlPanel {
    rules: ControlRules,
    step: u32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::for_reducer(&CarReducer::default())
    }
}

impl ControlPanel {
    pub fn new(rules: ControlRules, step: u32) -> Self {
        Self { rules, step }
    }

    /// Panel with the built-in rules for the reducer's limits.
    pub fn for_reducer(reducer: &CarReducer) -> Self {
        Self::new(
            ControlRulesBuilder::new(reducer.max_speed()).build(),
            reducer.step(),
        )
    }

    /// The accelerate control, carrying this panel's step.
    pub fn accelerate(&self) -> Control {
        Control::accelerate(self.step)
    }

    /// The brake control, carrying this panel's step.
    pub fn brake(&self) -> Control {
        Control::brake(self.step)
    }

    /// Whether `control` is enabled in `state` (pure).
    pub fn is_enabled(&self, control: Control, state: &CarState) -> bool {
        self.rules.check(&control, state).is_success()
    }

    /// Press a control, returning the action to dispatch.
    pub fn press(&self, control: Control, state: &CarState) -> Result<Action, ControlError> {
        match self.rules.check(&control, state) {
            Validation::Success(_) => Ok(control.action()),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                debug!(%control, ?violations, "control disabled");
                Err(ControlError::Disabled {
                    control,
                    violations,
                })
            }
        }
    }
}
