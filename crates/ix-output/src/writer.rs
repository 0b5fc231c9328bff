//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventTraceRow, OutputResult, StatisticsRow};

/// Sink for simulation output rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for retrieval with `take_error` after the run.
pub trait OutputWriter {
    /// Write one event-trace row.
    fn write_event(&mut self, row: &EventTraceRow) -> OutputResult<()>;

    /// Write the per-direction statistics rows.
    fn write_statistics(&mut self, rows: &[StatisticsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
