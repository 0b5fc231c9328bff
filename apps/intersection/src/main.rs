//! intersection — run one four-way signalised intersection simulation.
//!
//! Reads a whitespace-separated parameter file, prints the parameters, runs
//! the dispatch loop until it halts and prints the statistics.  With
//! `--output-dir` the event trace and statistics are also written as CSV.
//!
//! Narration goes through `log`; set `RUST_LOG=debug` to see every vehicle.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ix_core::{Axis, Direction, Tick, load_params_file};
use ix_output::{CsvWriter, SimOutputObserver};
use ix_sim::{
    Event, LightPhase, LogNarrator, PhaseColor, SimBuilder, SimObserver, Statistics, StepOutcome,
    Vehicle,
};

#[derive(Parser)]
#[command(name = "intersection")]
#[command(about = "Discrete-event simulation of a four-way signalised intersection")]
struct Cli {
    /// Parameter file: seed, stop time, green/yellow per axis, arrival
    /// mean/deviation per direction, yellow-advance percentage
    params: PathBuf,

    /// Write event_trace.csv and statistics.csv to this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only log warnings (overridden by RUST_LOG)
    #[arg(long)]
    quiet: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Narrates through `log` and, when enabled, forwards to the CSV writer.
struct RunObserver {
    narrator: LogNarrator,
    csv:      Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for RunObserver {
    fn on_scheduled(&mut self, now: Tick, event: &Event) {
        self.narrator.on_scheduled(now, event);
    }

    fn on_event_start(&mut self, event: &Event) {
        self.narrator.on_event_start(event);
    }

    fn on_arrival(&mut self, now: Tick, vehicle: &Vehicle, queue_len: usize) {
        self.narrator.on_arrival(now, vehicle, queue_len);
    }

    fn on_advance_start(&mut self, now: Tick, axis: Axis, color: PhaseColor) {
        self.narrator.on_advance_start(now, axis, color);
    }

    fn on_nothing_waiting(&mut self, now: Tick, dir: Direction) {
        self.narrator.on_nothing_waiting(now, dir);
    }

    fn on_advance(&mut self, now: Tick, vehicle: &Vehicle, color: PhaseColor) {
        self.narrator.on_advance(now, vehicle, color);
    }

    fn on_yellow_stop(&mut self, now: Tick, dir: Direction) {
        self.narrator.on_yellow_stop(now, dir);
    }

    fn on_advance_summary(
        &mut self,
        now:       Tick,
        dir:       Direction,
        color:     PhaseColor,
        advanced:  u64,
        remaining: usize,
    ) {
        self.narrator.on_advance_summary(now, dir, color, advanced, remaining);
    }

    fn on_phase_change(&mut self, now: Tick, from: LightPhase, to: LightPhase) {
        self.narrator.on_phase_change(now, from, to);
    }

    fn on_step(&mut self, outcome: &StepOutcome, phase: LightPhase) {
        self.narrator.on_step(outcome, phase);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_step(outcome, phase);
        }
    }

    fn on_sim_end(&mut self, final_time: Tick, stats: &Statistics) {
        self.narrator.on_sim_end(final_time, stats);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_sim_end(final_time, stats);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let params = match load_params_file(&cli.params) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{e}");
            println!(
                "ERROR: Parameter file was NOT read in successfully, so the \
                 simulation is NOT setup properly!"
            );
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{params}");

    let mut sim = SimBuilder::new(params).build()?;

    let csv = match &cli.output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };
    let mut obs = RunObserver { narrator: LogNarrator, csv };

    log::info!("Starting simulation at time {}", sim.now());
    let stats = sim.run(&mut obs);
    println!("{stats}");

    if let Some(mut csv) = obs.csv {
        if let Some(e) = csv.take_error() {
            eprintln!("output error: {e}");
            return Ok(ExitCode::FAILURE);
        }
        if let Some(dir) = &cli.output_dir {
            log::info!("CSV output written to {}", dir.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
