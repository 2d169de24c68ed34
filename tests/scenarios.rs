//! End-to-end driving scenarios.

use roadster::controls::ControlViolation;
use roadster::core::{reduce, Action, CarState};
use roadster::instrument::TickCounter;
use roadster::{SimConfig, Simulation, SimulationBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

#[test]
fn accelerate_then_brake_to_a_stop() {
    let mut state = CarState::default();

    state = reduce(&state, &Action::ToggleStarted);
    state = reduce(&state, &Action::Accelerate);
    state = reduce(&state, &Action::Accelerate);
    assert_eq!(state.speed, 10);

    for _ in 0..3 {
        state = reduce(&state, &Action::Brake);
    }
    assert_eq!(state.speed, 0);

    let parked = state;
    for _ in 0..10 {
        state = reduce(&state, &Action::Tick);
    }
    assert_eq!(state.distance, parked.distance);
}

#[test]
fn top_speed_holds_and_accrues() {
    let state = CarState::new(true, 200);

    let state = reduce(&state, &Action::Accelerate);
    assert_eq!(state.speed, 200);

    let state = reduce(&state, &Action::Tick);
    assert_eq!(state.distance, 200.0 / 36000.0);
    assert!((state.distance - 0.005556).abs() < 1e-6);
}

#[test]
fn legacy_and_unified_speed_actions_agree() {
    let start = CarState::new(true, 100);

    assert_eq!(
        reduce(&start, &Action::Accelerate),
        reduce(&start, &Action::ChangeSpeed(5))
    );
    assert_eq!(
        reduce(&start, &Action::Brake),
        reduce(&start, &Action::ChangeSpeed(-5))
    );
}

#[test]
fn wire_actions_drive_the_reducer() {
    let script = [
        r#"{"type":"ENGINE_ON"}"#,
        r#"{"type":"CHANGE_SPEED","payload":5}"#,
        r#"{"type":"CHANGE_SPEED","payload":5}"#,
        r#"{"type":"WATCH_CAR"}"#,
        r#"{"type":"RENDER"}"#,
    ];

    let state = script
        .iter()
        .map(|json| serde_json::from_str::<Action>(json).unwrap())
        .fold(CarState::default(), |state, action| reduce(&state, &action));

    assert!(state.started);
    assert_eq!(state.speed, 10);
    assert_eq!(state.distance, 10.0 / 36000.0);
}

#[tokio::test(start_paused = true)]
async fn one_second_of_ticks_at_40_kmh() {
    let counter = Arc::new(TickCounter::new());
    let sim = SimulationBuilder::new()
        .initial(CarState::new(true, 35))
        .instrument(counter.clone())
        .build()
        .unwrap();
    sim.accelerate().unwrap();

    time::sleep(Duration::from_millis(1050)).await;
    let state = sim.unmount();

    assert_eq!(counter.called(), 10);
    assert_eq!(state.speed, 40);
    assert!((state.distance - 10.0 * 40.0 / 36000.0).abs() < 1e-12);
}

#[tokio::test(start_paused = true)]
async fn engine_must_be_stopped_at_rest() {
    let sim = Simulation::mount(&SimConfig::default(), Arc::new(TickCounter::new())).unwrap();

    sim.toggle().unwrap();
    sim.accelerate().unwrap();
    sim.accelerate().unwrap();

    let err = sim.toggle().unwrap_err();
    assert_eq!(err.violations(), &[ControlViolation::Moving { speed: 10 }]);

    sim.brake().unwrap();
    sim.brake().unwrap();
    assert!(sim.brake().is_err());

    let parked = sim.toggle().unwrap();
    assert!(!parked.started);
    assert_eq!(parked.speed, 0);
}

#[tokio::test(start_paused = true)]
async fn ticks_keep_firing_with_engine_off() {
    let counter = Arc::new(TickCounter::new());
    let sim = Simulation::mount(&SimConfig::default(), counter.clone()).unwrap();

    time::sleep(Duration::from_millis(550)).await;

    assert_eq!(counter.called(), 5);
    assert_eq!(sim.state(), CarState::default());
    assert_eq!(counter.set_by(), Some(sim.driver_id()));
}

#[tokio::test(start_paused = true)]
async fn dropping_simulation_stops_its_driver() {
    let counter = Arc::new(TickCounter::new());
    let sim = Simulation::mount(&SimConfig::default(), counter.clone()).unwrap();

    time::sleep(Duration::from_millis(250)).await;
    drop(sim);
    time::sleep(Duration::from_secs(3)).await;

    assert_eq!(counter.called(), 2);
}

#[tokio::test(start_paused = true)]
async fn debug_cadence_from_config() {
    let config = SimConfig::from_toml_str("tick_interval_ms = 1000\n").unwrap();
    let counter = Arc::new(TickCounter::new());
    let sim = SimulationBuilder::new()
        .config(&config)
        .initial(CarState::new(true, 36))
        .instrument(counter.clone())
        .build()
        .unwrap();

    time::sleep(Duration::from_millis(3500)).await;
    let state = sim.unmount();

    assert_eq!(counter.called(), 3);
    assert!((state.distance - 3.0 * 36.0 / 3600.0).abs() < 1e-12);
}
