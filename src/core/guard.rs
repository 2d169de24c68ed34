//! Guard predicates over car state.
//!
//! Guards are pure boolean functions that decide whether something may
//! happen in a given state. The control panel uses them to enable or
//! disable controls without touching the reducer.

use super::state::CarState;

/// Pure predicate over a [`CarState`].
///
/// # Example
///
/// ```rust
/// use roadster::core::{CarState, Guard};
///
/// let stationary = Guard::new(|s: &CarState| s.is_stationary());
///
/// assert!(stationary.check(&CarState::new(true, 0)));
/// assert!(!stationary.check(&CarState::new(true, 40)));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&CarState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&CarState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard passes for this state.
    pub fn check(&self, state: &CarState) -> bool {
        (self.predicate)(state)
    }

    /// Guard that passes while the engine is running.
    pub fn engine_on() -> Self {
        Self::new(|s| s.started)
    }

    /// Guard that passes while the car is at rest.
    pub fn stationary() -> Self {
        Self::new(CarState::is_stationary)
    }

    /// Guard that passes while the car is below `max_speed`.
    pub fn below(max_speed: u32) -> Self {
        Self::new(move |s| s.speed < max_speed)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
