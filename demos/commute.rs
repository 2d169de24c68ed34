//! Commute
//!
//! This demo drives a short trip through the public API.
//!
//! Key concepts:
//! - Gated presses through the control panel
//! - The tick loop accruing distance in the background
//! - Injected instrumentation instead of global counters
//! - Unmounting stops the loop for good
//!
//! Run with: cargo run --example commute

use roadster::controls::Control;
use roadster::instrument::TickCounter;
use roadster::{CarState, SimulationBuilder};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    println!("=== Commute ===\n");

    let counter = Arc::new(TickCounter::new());
    let sim = SimulationBuilder::new()
        .initial(CarState::default())
        .tick_interval(Duration::from_millis(100))
        .instrument(counter.clone())
        .build()
        .unwrap();

    println!("Parked:      {}", sim.telemetry());

    if let Err(err) = sim.accelerate() {
        println!("Rejected:    {err}");
    }

    sim.toggle().unwrap();
    for _ in 0..12 {
        sim.accelerate().unwrap();
    }
    println!("Cruising:    {}", sim.telemetry());

    if let Err(err) = sim.press(Control::Toggle) {
        println!("Rejected:    {err}");
    }

    tokio::time::sleep(Duration::from_secs(2)).await;
    println!("After 2 s:   {}", sim.telemetry());

    while sim.state().speed > 0 {
        sim.brake().unwrap();
    }
    sim.toggle().unwrap();

    let final_state = sim.unmount();
    println!("Parked:      {}", final_state.telemetry());
    println!("\nTicks dispatched: {}", counter.called());

    println!("\n=== Demo Complete ===");
}
