//! Plain data row types written by output backends.

use ix_core::Direction;
use ix_sim::{DirectionStats, LightPhase, StepOutcome};

/// One dispatched event and what became of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTraceRow {
    /// Simulated time the event occurred at.
    pub time:        u64,
    /// Snake-case event kind, e.g. `arrive_east`.
    pub event:       &'static str,
    /// Light phase once the step was applied.
    pub phase_after: &'static str,
    /// `handled`, `ignored` or `overrun`.
    pub outcome:     &'static str,
}

impl EventTraceRow {
    /// Build a row from a dispatch step.  `None` for
    /// [`StepOutcome::Exhausted`], which consumed no event.
    pub fn from_step(outcome: &StepOutcome, phase: LightPhase) -> Option<Self> {
        let event = outcome.event()?;
        Some(Self {
            time:        event.occurs_at().0,
            event:       event.kind().as_str(),
            phase_after: phase.as_str(),
            outcome:     outcome.as_str(),
        })
    }
}

/// End-of-run totals for one travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsRow {
    pub direction:      &'static str,
    pub longest_queue:  u64,
    pub total_advanced: u64,
    pub total_arrived:  u64,
}

impl StatisticsRow {
    pub fn new(dir: Direction, stats: &DirectionStats) -> Self {
        Self {
            direction:      dir.as_str(),
            longest_queue:  stats.longest_queue as u64,
            total_advanced: stats.total_advanced,
            total_arrived:  stats.total_arrived,
        }
    }
}
