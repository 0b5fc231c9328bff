//! Integration tests for ix-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENT_TRACE_FILE, STATISTICS_FILE};
    use crate::row::{EventTraceRow, StatisticsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn event_row(time: u64) -> EventTraceRow {
        EventTraceRow {
            time,
            event:       "arrive_north",
            phase_after: "green_ns",
            outcome:     "handled",
        }
    }

    fn read_records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(EVENT_TRACE_FILE).exists());
        assert!(dir.path().join(STATISTICS_FILE).exists());
    }

    #[test]
    fn missing_output_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(EVENT_TRACE_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENT_TRACE_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "event", "phase_after", "outcome"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(STATISTICS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["direction", "longest_queue", "total_advanced", "total_arrived"]);
    }

    #[test]
    fn event_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&event_row(4)).unwrap();
        w.write_event(&event_row(9)).unwrap();
        w.finish().unwrap();

        let rows = read_records(&dir.path().join(EVENT_TRACE_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "arrive_north");
        assert_eq!(&rows[0][2], "green_ns");
        assert_eq!(&rows[0][3], "handled");
        assert_eq!(&rows[1][0], "9");
    }

    #[test]
    fn statistics_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            StatisticsRow { direction: "east", longest_queue: 2, total_advanced: 3, total_arrived: 4 },
            StatisticsRow { direction: "west", longest_queue: 0, total_advanced: 0, total_arrived: 0 },
        ];
        w.write_statistics(&rows).unwrap();
        w.finish().unwrap();

        let read = read_records(&dir.path().join(STATISTICS_FILE));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][0], "east");
        assert_eq!(&read[0][1], "2");
        assert_eq!(&read[0][2], "3");
        assert_eq!(&read[0][3], "4");
        assert_eq!(&read[1][0], "west");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_statistics_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_statistics(&[]).unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use ix_core::{Direction, Tick};
    use ix_sim::{DirectionStats, Event, EventKind, LightPhase, StepOutcome};

    use crate::row::{EventTraceRow, StatisticsRow};

    #[test]
    fn exhausted_step_has_no_row() {
        assert!(EventTraceRow::from_step(&StepOutcome::Exhausted, LightPhase::GreenEW).is_none());
    }

    #[test]
    fn step_row_uses_snake_case_labels() {
        let event = Event::new(Tick(7), EventKind::ChangeToGreenEW);
        let row = EventTraceRow::from_step(&StepOutcome::Ignored(event), LightPhase::YellowEW).unwrap();
        assert_eq!(row.time, 7);
        assert_eq!(row.event, "change_to_green_ew");
        assert_eq!(row.phase_after, "yellow_ew");
        assert_eq!(row.outcome, "ignored");
    }

    #[test]
    fn statistics_row_from_direction_stats() {
        let stats = DirectionStats { longest_queue: 5, total_advanced: 11, total_arrived: 13 };
        let row = StatisticsRow::new(Direction::South, &stats);
        assert_eq!(row.direction, "south");
        assert_eq!(row.longest_queue, 5);
        assert_eq!(row.total_advanced, 11);
        assert_eq!(row.total_arrived, 13);
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use ix_core::{ArrivalDist, PerDirection, PhaseTiming, SimParams, Tick};
    use ix_sim::SimBuilder;

    use crate::csv::{CsvWriter, EVENT_TRACE_FILE, STATISTICS_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{EventTraceRow, StatisticsRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// East every 5 ticks, everything else silent, 3/1 on both axes.
    fn scenario() -> SimParams {
        let quiet = ArrivalDist::new(1000, 0);
        SimParams {
            seed:                   1,
            stop_time:              Tick(20),
            east_west:              PhaseTiming::new(3, 1),
            north_south:            PhaseTiming::new(3, 1),
            arrivals:               PerDirection::new(ArrivalDist::new(5, 0), quiet, quiet, quiet),
            yellow_advance_percent: 0,
        }
    }

    /// Writer whose every call fails.
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_event(&mut self, _row: &EventTraceRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other("disk full")))
        }

        fn write_statistics(&mut self, _rows: &[StatisticsRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(scenario()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENT_TRACE_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        // 10 light changes + 4 east arrivals handled, then the overrun.
        assert_eq!(rows.len(), 15);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "change_to_yellow_ew");
        assert_eq!(&rows[0][2], "yellow_ew");
        let last = rows.last().unwrap();
        assert_eq!(&last[0], "23");
        assert_eq!(&last[3], "overrun");

        let mut rdr = csv::Reader::from_path(dir.path().join(STATISTICS_FILE)).unwrap();
        let stats: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(&stats[0][0], "east");
        assert_eq!(&stats[0][1], "2");
        assert_eq!(&stats[0][2], "3");
        assert_eq!(&stats[0][3], "4");
        assert!(stats[1..].iter().all(|r| &r[3] == "0"));
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(scenario()).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut obs);

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        // Taken once.
        assert!(obs.take_error().is_none());
        // Writing carried on after the first failure.
        assert!(obs.into_writer().calls > 1);
    }
}
