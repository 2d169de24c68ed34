//! Single-value state holder.

use crate::core::{Action, CarReducer, CarState, Telemetry};
use tokio::sync::watch;
use tracing::{debug, trace};

/// Owns the one `CarState` of a simulation.
///
/// Every dispatch runs the reducer and replaces the whole value under the
/// channel's write lock, so readers never observe a partial update.
/// Subscribers are only woken when the value actually changed.
#[derive(Debug)]
pub struct Store {
    reducer: CarReducer,
    tx: watch::Sender<CarState>,
}

impl Store {
    pub fn new(reducer: CarReducer, initial: CarState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { reducer, tx }
    }

    pub fn reducer(&self) -> &CarReducer {
        &self.reducer
    }

    /// Current state.
    pub fn snapshot(&self) -> CarState {
        *self.tx.borrow()
    }

    /// Current read-only projection.
    pub fn telemetry(&self) -> Telemetry {
        self.snapshot().telemetry()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<CarState> {
        self.tx.subscribe()
    }

    /// Reduce `action` against the current state and store the result.
    pub fn dispatch(&self, action: Action) -> CarState {
        match self.try_dispatch(|_| Ok::<_, std::convert::Infallible>(action)) {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }

    /// Pick the action from the current state, then reduce it.
    ///
    /// `select` and the reducer run under the same lock, so no tick can
    /// slip in between the decision and the update. If `select` fails the
    /// state is left untouched.
    pub fn try_dispatch<F, E>(&self, select: F) -> Result<CarState, E>
    where
        F: FnOnce(&CarState) -> Result<Action, E>,
    {
        let reducer = self.reducer;
        let mut outcome = None;

        self.tx.send_if_modified(|state| match select(&*state) {
            Ok(action) => {
                let next = reducer.reduce(state, &action);
                let changed = next != *state;
                *state = next;
                outcome = Some(Ok((action, next)));
                changed
            }
            Err(err) => {
                outcome = Some(Err(err));
                false
            }
        });

        let (action, next) = match outcome {
            Some(result) => result?,
            None => return Ok(self.snapshot()),
        };

        if action.is_tick() {
            trace!(speed = next.speed, distance = next.distance, "tick reduced");
        } else {
            debug!(
                action = action.name(),
                phase = %next.phase(),
                started = next.started,
                speed = next.speed,
                distance = next.distance,
                "dispatch"
            );
        }
        Ok(next)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(CarReducer::default(), CarState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn dispatch_replaces_state() {
        let store = Store::default();

        store.dispatch(Action::ToggleStarted);
        let state = store.dispatch(Action::Accelerate);

        assert_eq!(state, CarState::new(true, 5));
        assert_eq!(store.snapshot(), state);
    }

    #[test]
    fn failed_selection_leaves_state_untouched() {
        let store = Store::new(CarReducer::default(), CarState::new(true, 20));

        let result: Result<CarState, &str> = store.try_dispatch(|_| Err("disabled"));

        assert_eq!(result, Err("disabled"));
        assert_eq!(store.snapshot(), CarState::new(true, 20));
    }

    #[test]
    fn selection_sees_current_state() {
        let store = Store::new(CarReducer::default(), CarState::new(true, 20));

        let state = store
            .try_dispatch(|s| Ok::<_, ()>(Action::ChangeSpeed(-(s.speed as i32))))
            .unwrap();

        assert_eq!(state.speed, 0);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Store::default();
        let mut rx = store.subscribe();

        store.dispatch(Action::EngineOn);

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().started);
    }

    #[tokio::test]
    async fn identity_transitions_do_not_notify() {
        let store = Store::default();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.dispatch(Action::Tick);
        store.dispatch(Action::Unknown);

        assert!(!rx.has_changed().unwrap());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dispatch_logs_phase() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let store = Store::default();
        tracing::subscriber::with_default(subscriber, || {
            store.dispatch(Action::EngineOn);
            store.dispatch(Action::Accelerate);
        });

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("phase=Idling"), "{logs}");
        assert!(logs.contains("phase=Moving"), "{logs}");
    }

    #[test]
    fn telemetry_projects_snapshot() {
        let store = Store::new(CarReducer::default(), CarState::new(true, 60));
        let telemetry = store.telemetry();
        assert_eq!(telemetry.speed, 60);
        assert!(telemetry.started);
    }
}
