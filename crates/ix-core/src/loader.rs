//! Parameter file loader.
//!
//! # File format
//!
//! Whitespace-separated integers, read in this order (line breaks are not
//! significant, but the conventional layout is one group per line):
//!
//! ```text
//! 42            random seed
//! 500           simulation end time
//! 30 5          east-west green, yellow
//! 25 4          north-south green, yellow
//! 6 2           east arrival mean, std-dev
//! 7 3           west arrival mean, std-dev
//! 12 4          north arrival mean, std-dev
//! 11 3          south arrival mean, std-dev
//! 70            percent of cars that advance on yellow
//! ```
//!
//! Groups are checked as soon as they are read, so the first error reported
//! is the first bad group in the file.  A token that is present but negative
//! is reported as [`CoreError::Invalid`]; a missing or non-integer token is
//! [`CoreError::Parse`].

use std::io::Read;
use std::path::Path;

use crate::params::{
    arrival_field, EAST_WEST_FIELD, NORTH_SOUTH_FIELD, SEED_FIELD, STOP_TIME_FIELD,
    YELLOW_FIELD,
};
use crate::{ArrivalDist, CoreError, CoreResult, Direction, PerDirection, PhaseTiming, SimParams, Tick};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate [`SimParams`] from a parameter file.
pub fn load_params_file(path: &Path) -> CoreResult<SimParams> {
    let file = std::fs::File::open(path)?;
    load_params_reader(file)
}

/// Like [`load_params_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_params_reader<R: Read>(mut reader: R) -> CoreResult<SimParams> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = Tokens::new(&text);

    let seed = tokens.unsigned(SEED_FIELD)?;

    let stop_time = tokens.unsigned(STOP_TIME_FIELD)?;
    if stop_time == 0 {
        return Err(CoreError::Invalid {
            field:  STOP_TIME_FIELD,
            reason: "must be positive".to_string(),
        });
    }

    let east_west = tokens.timing(EAST_WEST_FIELD)?;
    let north_south = tokens.timing(NORTH_SOUTH_FIELD)?;

    let mut dists = [ArrivalDist::new(0, 0); 4];
    for (slot, dir) in dists.iter_mut().zip(Direction::ALL) {
        *slot = tokens.arrival(arrival_field(dir))?;
    }
    let [east, west, north, south] = dists;

    let percent = tokens.unsigned(YELLOW_FIELD)?;
    let yellow_advance_percent = u8::try_from(percent)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| CoreError::Invalid {
            field:  YELLOW_FIELD,
            reason: format!("{percent} is outside 0..=100"),
        })?;

    let params = SimParams {
        seed,
        stop_time: Tick(stop_time),
        east_west,
        north_south,
        arrivals: PerDirection::new(east, west, north, south),
        yellow_advance_percent,
    };
    params.validate()?;
    Ok(params)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.split_whitespace() }
    }

    fn signed(&mut self, field: &'static str) -> CoreResult<i64> {
        let token = self.inner.next().ok_or_else(|| CoreError::Parse {
            field,
            reason: "unexpected end of file".to_string(),
        })?;
        token.parse::<i64>().map_err(|e| CoreError::Parse {
            field,
            reason: format!("{token:?} is not an integer ({e})"),
        })
    }

    fn unsigned(&mut self, field: &'static str) -> CoreResult<u64> {
        let value = self.signed(field)?;
        u64::try_from(value).map_err(|_| CoreError::Invalid {
            field,
            reason: format!("{value} is negative"),
        })
    }

    fn timing(&mut self, field: &'static str) -> CoreResult<PhaseTiming> {
        let green = self.unsigned(field)?;
        let yellow = self.unsigned(field)?;
        let timing = PhaseTiming::new(green, yellow);
        timing.validate(field)?;
        Ok(timing)
    }

    fn arrival(&mut self, field: &'static str) -> CoreResult<ArrivalDist> {
        let mean = self.unsigned(field)?;
        let std_dev = self.unsigned(field)?;
        let dist = ArrivalDist::new(mean, std_dev);
        dist.validate(field)?;
        Ok(dist)
    }
}
