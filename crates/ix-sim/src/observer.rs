//! Reporting hooks for narration and data collection.

use ix_core::{Axis, Direction, Tick};

use crate::{Event, LightPhase, PhaseColor, Statistics, StepOutcome, Vehicle};

/// Callbacks invoked by [`IntersectionSim`][crate::IntersectionSim] as it
/// schedules and handles events.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are purely observational:
/// nothing they do feeds back into engine state.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct ArrivalCounter(u64);
///
/// impl SimObserver for ArrivalCounter {
///     fn on_arrival(&mut self, _now: Tick, _vehicle: &Vehicle, _queue_len: usize) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// An event was inserted into the pending list at time `now`.
    fn on_scheduled(&mut self, _now: Tick, _event: &Event) {}

    /// An event passed the stop-time check and is about to be applied.
    fn on_event_start(&mut self, _event: &Event) {}

    /// A vehicle joined its direction's queue, which is now `queue_len` long.
    fn on_arrival(&mut self, _now: Tick, _vehicle: &Vehicle, _queue_len: usize) {}

    /// The ending phase is about to let `axis` traffic through on `color`.
    fn on_advance_start(&mut self, _now: Tick, _axis: Axis, _color: PhaseColor) {}

    /// `dir` had no vehicles queued when its yellow began.
    fn on_nothing_waiting(&mut self, _now: Tick, _dir: Direction) {}

    /// A vehicle left its queue and crossed the intersection.
    fn on_advance(&mut self, _now: Tick, _vehicle: &Vehicle, _color: PhaseColor) {}

    /// The head vehicle in `dir` declined to run the yellow; nothing more
    /// advances in that direction this phase.
    fn on_yellow_stop(&mut self, _now: Tick, _dir: Direction) {}

    /// End-of-phase tally for one direction.
    fn on_advance_summary(
        &mut self,
        _now:       Tick,
        _dir:       Direction,
        _color:     PhaseColor,
        _advanced:  u64,
        _remaining: usize,
    ) {}

    /// The light moved from `from` to `to`.
    fn on_phase_change(&mut self, _now: Tick, _from: LightPhase, _to: LightPhase) {}

    /// Called after every single-step dispatch, including halts.
    ///
    /// `phase` is the active phase once the step has been applied.
    fn on_step(&mut self, _outcome: &StepOutcome, _phase: LightPhase) {}

    /// Called once when [`run`][crate::IntersectionSim::run] halts.
    fn on_sim_end(&mut self, _final_time: Tick, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want narration.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── LogNarrator ───────────────────────────────────────────────────────────────

/// Narrates the run through the `log` facade.
///
/// | Level   | What                                                    |
/// |---------|---------------------------------------------------------|
/// | `debug` | scheduling, each vehicle arriving, advancing or waiting |
/// | `info`  | handled events, advance headers and tallies, halts      |
/// | `warn`  | transition events ignored because they are out of phase |
#[derive(Default)]
pub struct LogNarrator;

impl SimObserver for LogNarrator {
    fn on_scheduled(&mut self, now: Tick, event: &Event) {
        log::debug!("Time: {now} Scheduled {event}");
    }

    fn on_event_start(&mut self, event: &Event) {
        log::info!("Handling {event}");
    }

    fn on_arrival(&mut self, now: Tick, vehicle: &Vehicle, queue_len: usize) {
        log::debug!(
            "Time: {now} Car {} arrives {} - queue length: {queue_len}",
            vehicle.id(),
            vehicle.direction()
        );
    }

    fn on_advance_start(&mut self, _now: Tick, axis: Axis, color: PhaseColor) {
        log::info!("Advancing cars on {axis} {color}");
    }

    fn on_nothing_waiting(&mut self, _now: Tick, dir: Direction) {
        log::debug!("  No {dir} cars waiting to advance on yellow");
    }

    fn on_advance(&mut self, _now: Tick, vehicle: &Vehicle, _color: PhaseColor) {
        log::debug!("  Car {} advances {}", vehicle.id(), vehicle.direction());
    }

    fn on_yellow_stop(&mut self, _now: Tick, dir: Direction) {
        log::debug!("  Next {dir} car will NOT advance on yellow");
    }

    fn on_advance_summary(
        &mut self,
        _now:      Tick,
        dir:       Direction,
        color:     PhaseColor,
        advanced:  u64,
        remaining: usize,
    ) {
        log::info!("{dir} cars advanced on {color}: {advanced} Remaining queue: {remaining}");
    }

    fn on_phase_change(&mut self, now: Tick, from: LightPhase, to: LightPhase) {
        log::debug!("Time: {now} Light changes from {from} to {to}");
    }

    fn on_step(&mut self, outcome: &StepOutcome, phase: LightPhase) {
        match outcome {
            StepOutcome::Handled(_) => {}
            StepOutcome::Ignored(event) => {
                log::warn!("Ignoring {event}: light is {phase}, not the phase it ends");
            }
            StepOutcome::Exhausted => {
                log::info!("No events to handle. Simulation complete.");
            }
            StepOutcome::Overrun(event) => {
                log::info!("Next event occurs AFTER the simulation end time ({event})!");
            }
        }
    }

    fn on_sim_end(&mut self, final_time: Tick, stats: &Statistics) {
        log::info!(
            "Simulation halted at time {final_time}: {} cars arrived, {} advanced",
            stats.total_arrived(),
            stats.total_advanced()
        );
    }
}
