//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ix_core::Tick;
use ix_sim::{LightPhase, SimObserver, Statistics, StepOutcome};

use crate::row::{EventTraceRow, StatisticsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the event trace and final statistics to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step(&mut self, outcome: &StepOutcome, phase: LightPhase) {
        if let Some(row) = EventTraceRow::from_step(outcome, phase) {
            let result = self.writer.write_event(&row);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_time: Tick, stats: &Statistics) {
        let rows: Vec<StatisticsRow> = stats
            .per_direction
            .iter()
            .map(|(dir, s)| StatisticsRow::new(dir, s))
            .collect();
        let result = self.writer.write_statistics(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
