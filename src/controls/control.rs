//! User-facing controls.

use crate::core::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A control on the dashboard.
///
/// Speed controls carry their own signed `delta`, so one handler serves
/// both accelerate and brake.
///
/// ```rust
/// use roadster::controls::Control;
/// use roadster::core::Action;
///
/// assert_eq!(Control::accelerate(5).action(), Action::ChangeSpeed(5));
/// assert_eq!(Control::brake(5).action(), Action::ChangeSpeed(-5));
/// assert_eq!(Control::Toggle.action(), Action::ToggleStarted);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Engine on/off
    Toggle,
    /// Accelerate (`delta > 0`) or brake (`delta < 0`)
    Speed { delta: i32 },
}

impl Control {
    /// Speed control that raises speed by `step`.
    pub fn accelerate(step: u32) -> Self {
        Self::Speed {
            delta: i32::try_from(step).unwrap_or(i32::MAX),
        }
    }

    /// Speed control that lowers speed by `step`.
    pub fn brake(step: u32) -> Self {
        Self::Speed {
            delta: i32::try_from(step).map(|d| -d).unwrap_or(-i32::MAX),
        }
    }

    /// The action dispatched when this control is pressed.
    pub fn action(&self) -> Action {
        match *self {
            Self::Toggle => Action::ToggleStarted,
            Self::Speed { delta } => Action::ChangeSpeed(delta),
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Toggle => f.write_str("toggle"),
            Self::Speed { delta } if delta > 0 => write!(f, "accelerate (+{delta})"),
            Self::Speed { delta } if delta < 0 => write!(f, "brake ({delta})"),
            Self::Speed { .. } => f.write_str("speed (0)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_direction() {
        assert_eq!(Control::Toggle.to_string(), "toggle");
        assert_eq!(Control::accelerate(5).to_string(), "accelerate (+5)");
        assert_eq!(Control::brake(10).to_string(), "brake (-10)");
        assert_eq!(Control::Speed { delta: 0 }.to_string(), "speed (0)");
    }

    #[test]
    fn oversized_steps_saturate() {
        assert_eq!(Control::accelerate(u32::MAX), Control::Speed { delta: i32::MAX });
        assert_eq!(Control::brake(u32::MAX), Control::Speed { delta: -i32::MAX });
    }
}
