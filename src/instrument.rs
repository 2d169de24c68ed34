//! Injectable tick instrumentation.
//!
//! The driver loop reports every tick to an [`Instrument`] handed to it at
//! construction. Diagnostics such as "how many ticks were dispatched" and
//! "which driver dispatched last" live in the instrument, never in global
//! state or in [`CarState`].

use crate::core::CarState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

/// Record of a single tick dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    /// Driver that dispatched the tick
    pub driver: Uuid,
    /// 1-based tick number within that driver
    pub sequence: u64,
    /// When the tick was dispatched
    pub at: DateTime<Utc>,
    /// State after the tick was reduced
    pub state: CarState,
}

/// Observer of tick dispatches.
pub trait Instrument: Send + Sync {
    fn on_tick(&self, event: &TickEvent);
}

/// Instrument that ignores every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInstrument;

impl Instrument for NoopInstrument {
    fn on_tick(&self, _event: &TickEvent) {}
}

/// Instrument that emits a `tracing` event per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingInstrument;

impl Instrument for TracingInstrument {
    fn on_tick(&self, event: &TickEvent) {
        tracing::trace!(
            driver = %event.driver,
            sequence = event.sequence,
            speed = event.state.speed,
            distance = event.state.distance,
            "tick"
        );
    }
}

/// Counts ticks and remembers which driver dispatched the last one.
///
/// Share it with the driver through an `Arc` and read it from the test or
/// display side.
///
/// ```rust
/// use roadster::instrument::{Instrument, TickCounter, TickEvent};
/// use roadster::core::CarState;
///
/// let counter = TickCounter::new();
/// let driver = uuid::Uuid::new_v4();
/// counter.on_tick(&TickEvent {
///     driver,
///     sequence: 1,
///     at: chrono::Utc::now(),
///     state: CarState::default(),
/// });
///
/// assert_eq!(counter.called(), 1);
/// assert_eq!(counter.set_by(), Some(driver));
/// ```
#[derive(Debug, Default)]
pub struct TickCounter {
    called: AtomicU64,
    set_by: RwLock<Option<Uuid>>,
}

impl TickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks observed.
    pub fn called(&self) -> u64 {
        self.called.load(Ordering::SeqCst)
    }

    /// Driver that dispatched the most recent tick.
    pub fn set_by(&self) -> Option<Uuid> {
        match self.set_by.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Instrument for TickCounter {
    fn on_tick(&self, event: &TickEvent) {
        self.called.fetch_add(1, Ordering::SeqCst);
        let mut set_by = match self.set_by.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *set_by = Some(event.driver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn event(driver: Uuid, sequence: u64) -> TickEvent {
        TickEvent {
            driver,
            sequence,
            at: Utc::now(),
            state: CarState::default(),
        }
    }

    #[test]
    fn counter_starts_empty() {
        let counter = TickCounter::new();
        assert_eq!(counter.called(), 0);
        assert_eq!(counter.set_by(), None);
    }

    #[test]
    fn counter_tracks_latest_driver() {
        let counter = TickCounter::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        counter.on_tick(&event(first, 1));
        counter.on_tick(&event(second, 1));
        counter.on_tick(&event(second, 2));

        assert_eq!(counter.called(), 3);
        assert_eq!(counter.set_by(), Some(second));
    }

    #[test]
    fn shared_counter_observes_through_arc() {
        let counter = Arc::new(TickCounter::new());
        let instrument: Arc<dyn Instrument> = counter.clone();

        instrument.on_tick(&event(Uuid::new_v4(), 1));

        assert_eq!(counter.called(), 1);
    }

    #[test]
    fn tick_event_serializes() {
        let event = event(Uuid::nil(), 7);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["sequence"], 7);
        assert_eq!(json["driver"], "00000000-0000-0000-0000-000000000000");
    }
}
