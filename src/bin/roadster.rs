//! Command-line dashboard for the car simulation.
//!
//! Reads control commands from `--script` or stdin and prints the dashboard
//! readout after each one.

use std::{path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use roadster::{
    core::{Action, Telemetry},
    instrument::{Instrument, TickCounter, TracingInstrument, TickEvent},
    SimConfig, Simulation,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    signal, time,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a simulated car from the terminal")]
struct Args {
    /// TOML file with tick_interval_ms, max_speed and speed_step
    #[arg(long)]
    config: Option<PathBuf>,

    /// Commands separated by ';' (e.g. "toggle; accelerate; wait 1000; status")
    #[arg(long)]
    script: Option<String>,

    /// Keep driving this many milliseconds after the script finishes
    #[arg(long, default_value_t = 0)]
    hold_ms: u64,

    /// Print the readout as JSON
    #[arg(long)]
    json: bool,
}

/// One line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Toggle,
    On,
    Off,
    Accelerate,
    Brake,
    Speed(i32),
    Wait(Duration),
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let arg = words.next();

        let command = match (verb, arg) {
            ("toggle" | "t", None) => Command::Toggle,
            ("on", None) => Command::On,
            ("off", None) => Command::Off,
            ("accelerate" | "a", None) => Command::Accelerate,
            ("brake" | "b", None) => Command::Brake,
            ("speed", Some(delta)) => Command::Speed(
                delta
                    .parse()
                    .with_context(|| format!("invalid delta {delta:?}"))?,
            ),
            ("wait", Some(ms)) => Command::Wait(Duration::from_millis(
                ms.parse()
                    .with_context(|| format!("invalid wait {ms:?}"))?,
            )),
            ("status" | "s", None) => Command::Status,
            ("quit" | "q" | "exit", None) => Command::Quit,
            _ => bail!("unknown command {line:?}"),
        };

        if words.next().is_some() {
            bail!("too many arguments in {line:?}");
        }
        Ok(command)
    }
}

/// Counts ticks and forwards them to the tracing output.
struct CliInstrument {
    counter: TickCounter,
}

impl Instrument for CliInstrument {
    fn on_tick(&self, event: &TickEvent) {
        self.counter.on_tick(event);
        TracingInstrument.on_tick(event);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let Args {
        config,
        script,
        hold_ms,
        json,
    } = Args::parse();

    let config = SimConfig::load_or_default(config.as_deref())
        .context("failed to load configuration")?;
    info!(?config, "configuration loaded");

    let instrument = Arc::new(CliInstrument {
        counter: TickCounter::new(),
    });
    let sim = Simulation::mount(&config, instrument.clone())?;

    let outcome = match script {
        Some(script) => run_script(&sim, &script, hold_ms, json).await,
        None => run_interactive(&sim, json).await,
    };

    let final_state = sim.unmount();
    outcome?;

    info!(ticks = instrument.counter.called(), "simulation finished");
    render(&final_state.telemetry(), json)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Keep stdout for the readout.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_script(sim: &Simulation, script: &str, hold_ms: u64, json: bool) -> Result<()> {
    let commands = script
        .split(';')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Command::from_str)
        .collect::<Result<Vec<_>>>()?;

    for command in commands {
        if command == Command::Quit {
            break;
        }
        execute(sim, command, json).await?;
    }

    if hold_ms > 0 {
        time::sleep(Duration::from_millis(hold_ms)).await;
    }
    Ok(())
}

async fn run_interactive(sim: &Simulation, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(sim, command, json).await?,
                    Err(err) => warn!("{err:#}"),
                }
            }
            _ = signal::ctrl_c() => {
                warn!("received Ctrl+C, shutting down");
                break;
            }
        }
    }
    Ok(())
}

async fn execute(sim: &Simulation, command: Command, json: bool) -> Result<()> {
    let pressed = match command {
        Command::Toggle => sim.toggle(),
        Command::Accelerate => sim.accelerate(),
        Command::Brake => sim.brake(),
        Command::Speed(delta) => sim.press(roadster::Control::Speed { delta }),
        Command::On => Ok(sim.dispatch(Action::EngineOn)),
        Command::Off => Ok(sim.dispatch(Action::EngineStop)),
        Command::Wait(duration) => {
            time::sleep(duration).await;
            return Ok(());
        }
        Command::Status | Command::Quit => Ok(sim.state()),
    };

    match pressed {
        Ok(state) => render(&state.telemetry(), json),
        Err(err) => {
            warn!("{err}");
            Ok(())
        }
    }
}

fn render(telemetry: &Telemetry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(telemetry)?);
    } else {
        println!("{telemetry}");
    }
    Ok(())
}
