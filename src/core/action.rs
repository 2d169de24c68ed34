//! Actions accepted by the reducer.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tagged request to change the car state.
///
/// Serialized in the `{ "type": ..., "payload": ... }` shape used by
/// dispatch-style front ends. Tags that are not recognised deserialize to
/// [`Action::Unknown`] whatever their payload, and the reducer treats them
/// as a no-op. Payloads on unit actions are ignored.
///
/// # Example
///
/// ```rust
/// use roadster::core::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"CHANGE_SPEED","payload":-5}"#).unwrap();
/// assert_eq!(action, Action::ChangeSpeed(-5));
///
/// let action: Action = serde_json::from_str(r#"{"type":"HONK","payload":3}"#).unwrap();
/// assert_eq!(action, Action::Unknown);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Flip the engine flag
    ToggleStarted,
    /// Start the engine
    EngineOn,
    /// Stop the engine and bring the car to rest
    EngineStop,
    /// Increase speed by one step
    Accelerate,
    /// Decrease speed by one step
    Brake,
    /// Change speed by a signed delta
    ChangeSpeed(i32),
    /// Time-driven distance accrual
    Tick,
    /// Any action kind this reducer does not know
    Unknown,
}

/// Wire form before the tag is interpreted.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;

        let action = match kind.as_str() {
            "TOGGLE_STARTED" => Self::ToggleStarted,
            "ENGINE_ON" => Self::EngineOn,
            "ENGINE_STOP" => Self::EngineStop,
            "ACCELERATE" => Self::Accelerate,
            "BRAKE" => Self::Brake,
            "CHANGE_SPEED" => {
                let payload =
                    payload.ok_or_else(|| <D::Error as de::Error>::missing_field("payload"))?;
                let delta = i32::deserialize(payload).map_err(<D::Error as de::Error>::custom)?;
                Self::ChangeSpeed(delta)
            }
            "TICK" | "WATCH_CAR" => Self::Tick,
            _ => Self::Unknown,
        };
        Ok(action)
    }
}

impl Action {
    /// Get the action's wire name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleStarted => "TOGGLE_STARTED",
            Self::EngineOn => "ENGINE_ON",
            Self::EngineStop => "ENGINE_STOP",
            Self::Accelerate => "ACCELERATE",
            Self::Brake => "BRAKE",
            Self::ChangeSpeed(_) => "CHANGE_SPEED",
            Self::Tick => "TICK",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether this action originates from the driver loop rather than a user.
    pub fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }
}
