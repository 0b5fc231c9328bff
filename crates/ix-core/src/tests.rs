//! Unit tests for ix-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn ids_increase_from_first() {
        let a = VehicleId::FIRST;
        let b = a.next();
        assert_eq!(a, VehicleId(1));
        assert_eq!(b, VehicleId(2));
        assert!(a < b);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert!(Tick(15) > t);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Tick(42).to_string(), "42");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Axis, Direction, PerDirection};

    #[test]
    fn axes() {
        assert_eq!(Direction::East.axis(), Axis::EastWest);
        assert_eq!(Direction::West.axis(), Axis::EastWest);
        assert_eq!(Direction::North.axis(), Axis::NorthSouth);
        assert_eq!(Direction::South.axis(), Axis::NorthSouth);
        assert_eq!(Axis::EastWest.directions(), [Direction::East, Direction::West]);
    }

    #[test]
    fn per_direction_indexing() {
        let mut counts: PerDirection<u32> = PerDirection::default();
        counts[Direction::North] += 3;
        counts[Direction::West] += 1;
        assert_eq!(counts[Direction::North], 3);
        assert_eq!(counts[Direction::West], 1);
        assert_eq!(counts[Direction::East], 0);

        let order: Vec<Direction> = counts.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Direction::ALL.to_vec());
    }

    #[test]
    fn from_fn_visits_every_direction() {
        let labels = PerDirection::from_fn(|d| d.as_str());
        assert_eq!(labels[Direction::South], "south");
        assert_eq!(labels[Direction::East], "east");
    }

    #[test]
    fn display() {
        assert_eq!(Direction::East.to_string(), "east-bound");
        assert_eq!(Axis::NorthSouth.to_string(), "north-south");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform_in_range(1, 100), r2.uniform_in_range(1, 100));
            assert_eq!(r1.positive_normal(10, 4), r2.positive_normal(10, 4));
        }
    }

    #[test]
    fn reseed_restarts_stream() {
        let mut rng = SimRng::new(7);
        let first: Vec<i64> = (0..10).map(|_| rng.uniform_in_range(0, 1000)).collect();
        rng.reseed(7);
        let again: Vec<i64> = (0..10).map(|_| rng.uniform_in_range(0, 1000)).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn uniform_is_inclusive() {
        let mut rng = SimRng::new(0);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let v = rng.uniform_in_range(1, 4);
            assert!((1..=4).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn zero_deviation_returns_mean() {
        let mut rng = SimRng::new(3);
        for _ in 0..20 {
            assert_eq!(rng.positive_normal(5, 0), 5);
        }
    }

    #[test]
    fn wide_deviation_never_negative() {
        // A deviation much larger than the mean pushes many raw samples
        // below zero; they must all clamp to 0.
        let mut rng = SimRng::new(99);
        let mut zeros = 0;
        for _ in 0..1000 {
            let v = rng.positive_normal(1, 50);
            if v == 0 {
                zeros += 1;
            }
        }
        assert!(zeros > 0, "expected some clamped samples");
    }

    #[test]
    fn normal_mean_is_roughly_centred() {
        let mut rng = SimRng::new(2024);
        let n = 5000;
        let sum: u64 = (0..n).map(|_| rng.positive_normal(100, 10)).sum();
        let avg = sum as f64 / n as f64;
        assert!((avg - 100.0).abs() < 2.0, "got {avg}");
    }
}

#[cfg(test)]
mod params {
    use crate::{ArrivalDist, CoreError, PerDirection, PhaseTiming, SimParams, Tick};

    fn valid() -> SimParams {
        SimParams {
            seed:                   1,
            stop_time:              Tick(100),
            east_west:              PhaseTiming::new(10, 2),
            north_south:            PhaseTiming::new(8, 3),
            arrivals:               PerDirection::new(
                ArrivalDist::new(5, 1),
                ArrivalDist::new(6, 2),
                ArrivalDist::new(7, 0),
                ArrivalDist::new(8, 3),
            ),
            yellow_advance_percent: 50,
        }
    }

    #[test]
    fn valid_params_pass() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn red_times_are_opposite_cycles() {
        let p = valid();
        assert_eq!(p.east_west_red(), 11);
        assert_eq!(p.north_south_red(), 12);
    }

    #[test]
    fn zero_durations_rejected() {
        let mut p = valid();
        p.north_south.yellow = 0;
        match p.validate() {
            Err(CoreError::Invalid { field, .. }) => assert_eq!(field, "north-south times"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn zero_stop_time_rejected() {
        let mut p = valid();
        p.stop_time = Tick::ZERO;
        assert!(matches!(p.validate(), Err(CoreError::Invalid { .. })));
    }

    #[test]
    fn zero_mean_rejected() {
        let mut p = valid();
        p.arrivals[crate::Direction::West].mean = 0;
        match p.validate() {
            Err(CoreError::Invalid { field, .. }) => assert_eq!(field, "west arrival distribution"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn percentage_above_hundred_rejected() {
        let mut p = valid();
        p.yellow_advance_percent = 101;
        assert!(p.validate().is_err());
        p.yellow_advance_percent = 100;
        assert!(p.validate().is_ok());
        p.yellow_advance_percent = 0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn display_block() {
        let text = valid().to_string();
        assert!(text.starts_with("===== Begin Simulation Parameters ====="));
        assert!(text.contains("East-West Timing - Green: 10 Yellow: 2 Red: 11"));
        assert!(text.contains("west - Mean: 6 StdDev: 2"));
        assert!(text.ends_with("===== End Simulation Parameters ====="));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_params_reader, CoreError, Direction, Tick};

    const GOOD: &str = "\
1
20
3 1
3 1
5 0
1000 0
1000 0
1000 0
0
";

    #[test]
    fn loads_well_formed_file() {
        let p = load_params_reader(Cursor::new(GOOD)).unwrap();
        assert_eq!(p.seed, 1);
        assert_eq!(p.stop_time, Tick(20));
        assert_eq!(p.east_west.green, 3);
        assert_eq!(p.east_west.yellow, 1);
        assert_eq!(p.arrivals[Direction::East].mean, 5);
        assert_eq!(p.arrivals[Direction::South].mean, 1000);
        assert_eq!(p.yellow_advance_percent, 0);
    }

    #[test]
    fn layout_is_whitespace_insensitive() {
        let flat = GOOD.replace('\n', "  ");
        let a = load_params_reader(Cursor::new(GOOD)).unwrap();
        let b = load_params_reader(Cursor::new(flat)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn truncated_file_is_parse_error() {
        let err = load_params_reader(Cursor::new("1 20 3 1 3")).unwrap_err();
        match err {
            CoreError::Parse { field, .. } => assert_eq!(field, "north-south times"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_is_parse_error() {
        let err = load_params_reader(Cursor::new("1 abc")).unwrap_err();
        match err {
            CoreError::Parse { field, .. } => assert_eq!(field, "simulation end time"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn negative_seed_is_invalid() {
        let err = load_params_reader(Cursor::new("-1 20")).unwrap_err();
        match err {
            CoreError::Invalid { field, .. } => assert_eq!(field, "random generator seed"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn first_bad_group_is_reported() {
        // East-west yellow is zero and the percentage is out of range; the
        // east-west group comes first.
        let text = "1 20 3 0 3 1 5 0 5 0 5 0 5 0 150";
        let err = load_params_reader(Cursor::new(text)).unwrap_err();
        match err {
            CoreError::Invalid { field, .. } => assert_eq!(field, "east-west times"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn negative_deviation_is_invalid() {
        let text = "1 20 3 1 3 1 5 0 5 -2 5 0 5 0 50";
        let err = load_params_reader(Cursor::new(text)).unwrap_err();
        match err {
            CoreError::Invalid { field, .. } => assert_eq!(field, "west arrival distribution"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn percentage_out_of_range_is_invalid() {
        let text = "1 20 3 1 3 1 5 0 5 0 5 0 5 0 101";
        let err = load_params_reader(Cursor::new(text)).unwrap_err();
        match err {
            CoreError::Invalid { field, .. } => assert_eq!(field, "percentage yellow advance"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_params_file(std::path::Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
