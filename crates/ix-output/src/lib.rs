//! `ix-output` — CSV output for the intersection simulator.
//!
//! | File               | One row per                                   |
//! |--------------------|-----------------------------------------------|
//! | `event_trace.csv`  | dispatched event (handled, ignored, overrun)  |
//! | `statistics.csv`   | travel direction, written when the run halts  |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ix_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ix_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, EVENT_TRACE_FILE, STATISTICS_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventTraceRow, StatisticsRow};
pub use writer::OutputWriter;
