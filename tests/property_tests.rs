//! Property-based tests for the car reducer and control panel.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and actions.

use proptest::prelude::*;
use roadster::controls::{Control, ControlPanel};
use roadster::core::{reduce, Action, CarState};

prop_compose! {
    fn arbitrary_state()(
        started in any::<bool>(),
        speed in 0..=200u32,
        distance in 0.0..10_000.0f64,
    ) -> CarState {
        CarState { started, speed, distance }
    }
}

prop_compose! {
    fn moving_state()(speed in 1..=200u32, distance in 0.0..10_000.0f64) -> CarState {
        CarState { started: true, speed, distance }
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::ToggleStarted),
        Just(Action::EngineOn),
        Just(Action::EngineStop),
        Just(Action::Accelerate),
        Just(Action::Brake),
        any::<i32>().prop_map(Action::ChangeSpeed),
        Just(Action::Tick),
        Just(Action::Unknown),
    ]
}

proptest! {
    #[test]
    fn engine_stop_parks_the_car(state in arbitrary_state()) {
        let next = reduce(&state, &Action::EngineStop);
        prop_assert_eq!(next.speed, 0);
        prop_assert!(!next.started);
    }

    #[test]
    fn accelerate_saturates_at_top_speed(state in arbitrary_state()) {
        let next = reduce(&state, &Action::Accelerate);
        prop_assert_eq!(next.speed, (state.speed + 5).min(200));
    }

    #[test]
    fn brake_saturates_at_zero(state in arbitrary_state()) {
        let next = reduce(&state, &Action::Brake);
        prop_assert_eq!(next.speed, state.speed.saturating_sub(5));
    }

    #[test]
    fn tick_accrues_exactly(state in arbitrary_state()) {
        let next = reduce(&state, &Action::Tick);
        prop_assert_eq!(next.distance, state.distance + f64::from(state.speed) / 36000.0);
        prop_assert_eq!(next.speed, state.speed);
        prop_assert_eq!(next.started, state.started);
    }

    #[test]
    fn unknown_action_is_identity(state in arbitrary_state()) {
        prop_assert_eq!(reduce(&state, &Action::Unknown), state);
    }

    #[test]
    fn speed_stays_in_range(
        state in arbitrary_state(),
        actions in prop::collection::vec(arbitrary_action(), 0..50)
    ) {
        let mut current = state;
        for action in &actions {
            current = reduce(&current, action);
            prop_assert!(current.speed <= 200);
        }
    }

    #[test]
    fn distance_never_decreases(
        state in arbitrary_state(),
        actions in prop::collection::vec(arbitrary_action(), 0..50)
    ) {
        let mut current = state;
        for action in &actions {
            let next = reduce(&current, action);
            prop_assert!(next.distance >= current.distance);
            current = next;
        }
    }

    #[test]
    fn reduce_is_pure(state in arbitrary_state(), action in arbitrary_action()) {
        let before = state;
        let first = reduce(&state, &action);
        let second = reduce(&state, &action);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn toggle_allowed_by_reducer_but_gated_by_panel(state in moving_state()) {
        let next = reduce(&state, &Action::ToggleStarted);
        prop_assert_eq!(next.started, !state.started);

        let panel = ControlPanel::default();
        prop_assert!(!panel.is_enabled(Control::Toggle, &state));
        prop_assert!(panel.press(Control::Toggle, &state).is_err());
    }

    #[test]
    fn enabled_presses_always_change_speed(state in arbitrary_state()) {
        let panel = ControlPanel::default();
        for control in [panel.accelerate(), panel.brake()] {
            if let Ok(action) = panel.press(control, &state) {
                prop_assert_ne!(reduce(&state, &action).speed, state.speed);
            }
        }
    }

    #[test]
    fn action_roundtrip_serialization(action in arbitrary_action()) {
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(action, deserialized);
    }
}
