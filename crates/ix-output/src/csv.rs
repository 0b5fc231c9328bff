//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `event_trace.csv`
//! - `statistics.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventTraceRow, OutputResult, StatisticsRow};
use crate::writer::OutputWriter;

pub const EVENT_TRACE_FILE: &str = "event_trace.csv";
pub const STATISTICS_FILE:  &str = "statistics.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:     Writer<File>,
    statistics: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join(EVENT_TRACE_FILE))?;
        events.write_record(["time", "event", "phase_after", "outcome"])?;

        let mut statistics = Writer::from_path(dir.join(STATISTICS_FILE))?;
        statistics.write_record(["direction", "longest_queue", "total_advanced", "total_arrived"])?;

        Ok(Self {
            events,
            statistics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventTraceRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.event.to_string(),
            row.phase_after.to_string(),
            row.outcome.to_string(),
        ])?;
        Ok(())
    }

    fn write_statistics(&mut self, rows: &[StatisticsRow]) -> OutputResult<()> {
        for row in rows {
            self.statistics.write_record(&[
                row.direction.to_string(),
                row.longest_queue.to_string(),
                row.total_advanced.to_string(),
                row.total_arrived.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.statistics.flush()?;
        Ok(())
    }
}
