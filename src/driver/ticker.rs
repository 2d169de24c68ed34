//! Cancellable periodic driver that dispatches `Tick`.

use super::store::Store;
use crate::core::Action;
use crate::instrument::{Instrument, TickEvent};
use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::info;
use uuid::Uuid;

/// Lifecycle of a driver loop: `Idle -> Running -> Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerState {
    /// Constructed, not yet started
    Idle,
    /// Dispatching ticks
    Running,
    /// Stopped for good
    Cancelled,
}

/// A driver loop that has not been started yet.
///
/// The loop fires at the cadence of the store's reducer, so the timer and
/// the per-tick distance always agree.
///
/// # Example
///
/// ```rust
/// use roadster::driver::{Store, Ticker, TickerState};
/// use roadster::instrument::NoopInstrument;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Arc::new(Store::default());
/// let ticker = Ticker::new(store, Arc::new(NoopInstrument));
/// assert_eq!(ticker.interval(), Duration::from_millis(100));
/// assert_eq!(ticker.state(), TickerState::Idle);
///
/// let mut handle = ticker.start();
/// assert_eq!(handle.state(), TickerState::Running);
///
/// handle.stop();
/// handle.stop();
/// assert_eq!(handle.state(), TickerState::Cancelled);
/// # }
/// ```
pub struct Ticker {
    id: Uuid,
    store: Arc<Store>,
    interval: Duration,
    instrument: Arc<dyn Instrument>,
}

impl Ticker {
    pub fn new(store: Arc<Store>, instrument: Arc<dyn Instrument>) -> Self {
        let interval = store.reducer().tick_interval();
        Self {
            id: Uuid::new_v4(),
            store,
            interval,
            instrument,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> TickerState {
        TickerState::Idle
    }

    /// Spawn the loop on the current tokio runtime.
    ///
    /// The first tick fires one full interval after start. Ticks that fall
    /// behind are delayed, never burst.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(self) -> TickerHandle {
        let Ticker {
            id,
            store,
            interval,
            instrument,
        } = self;
        let live = Arc::new(Mutex::new(true));
        let gate = Arc::clone(&live);

        let task = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + interval, interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut sequence = 0u64;

            loop {
                ticks.tick().await;

                // Holding the gate across the dispatch lets stop() wait out
                // an in-flight tick. The instrument runs after it is released.
                let state = {
                    let open = gate.lock().unwrap_or_else(PoisonError::into_inner);
                    if !*open {
                        break;
                    }
                    store.dispatch(Action::Tick)
                };
                sequence += 1;
                instrument.on_tick(&TickEvent {
                    driver: id,
                    sequence,
                    at: Utc::now(),
                    state,
                });
            }
        });

        info!(driver = %id, ?interval, "ticker started");
        TickerHandle {
            id,
            live,
            task: Some(task),
        }
    }
}

/// Handle to a running driver loop.
///
/// Stopping is idempotent. Dropping the handle stops the loop, so a loop
/// can never outlive the component that owns it.
#[derive(Debug)]
pub struct TickerHandle {
    id: Uuid,
    live: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> TickerState {
        if self.task.is_some() {
            TickerState::Running
        } else {
            TickerState::Cancelled
        }
    }

    /// Stop the loop. No tick is dispatched once this returns.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        *self.live.lock().unwrap_or_else(PoisonError::into_inner) = false;
        task.abort();
        info!(driver = %self.id, "ticker stopped");
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
