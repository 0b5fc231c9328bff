//! Simulation parameters and their range checks.
//!
//! The engine trusts a validated [`SimParams`]: every duration is positive,
//! every arrival mean is positive and the yellow-advance percentage lies in
//! `[0, 100]`.  [`SimParams::validate`] is the single place those rules live;
//! the loader applies the same per-group checks as it reads each group.

use std::fmt;

use crate::{Axis, CoreError, CoreResult, Direction, PerDirection, Tick};

// ── PhaseTiming ───────────────────────────────────────────────────────────────

/// Green and yellow durations for one axis of the intersection.
///
/// The green duration doubles as the per-direction cap on vehicles advanced
/// during the green phase, and likewise for yellow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseTiming {
    pub green:  u64,
    pub yellow: u64,
}

impl PhaseTiming {
    pub fn new(green: u64, yellow: u64) -> Self {
        Self { green, yellow }
    }

    /// Both durations must be positive.
    pub fn validate(&self, field: &'static str) -> CoreResult<()> {
        if self.green == 0 || self.yellow == 0 {
            return Err(CoreError::Invalid {
                field,
                reason: format!(
                    "green ({}) and yellow ({}) must both be positive",
                    self.green, self.yellow
                ),
            });
        }
        Ok(())
    }

    /// Length of one green + yellow cycle on this axis.
    #[inline]
    pub fn total(&self) -> u64 {
        self.green + self.yellow
    }
}

// ── ArrivalDist ───────────────────────────────────────────────────────────────

/// Interarrival-time distribution for one direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalDist {
    pub mean:    u64,
    pub std_dev: u64,
}

impl ArrivalDist {
    pub fn new(mean: u64, std_dev: u64) -> Self {
        Self { mean, std_dev }
    }

    /// The mean must be positive; the unsigned deviation is always valid.
    pub fn validate(&self, field: &'static str) -> CoreResult<()> {
        if self.mean == 0 {
            return Err(CoreError::Invalid {
                field,
                reason: "mean interarrival time must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Error-message label for each direction's arrival group.
pub fn arrival_field(dir: Direction) -> &'static str {
    match dir {
        Direction::East  => "east arrival distribution",
        Direction::West  => "west arrival distribution",
        Direction::North => "north arrival distribution",
        Direction::South => "south arrival distribution",
    }
}

pub const SEED_FIELD:        &str = "random generator seed";
pub const STOP_TIME_FIELD:   &str = "simulation end time";
pub const EAST_WEST_FIELD:   &str = "east-west times";
pub const NORTH_SOUTH_FIELD: &str = "north-south times";
pub const YELLOW_FIELD:      &str = "percentage yellow advance";

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Everything the engine needs to run one simulation.
///
/// Typically loaded with [`load_params_file`][crate::load_params_file] and
/// passed to the engine builder, which re-validates before constructing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Events occurring strictly after this time are not applied.
    pub stop_time: Tick,

    pub east_west:   PhaseTiming,
    pub north_south: PhaseTiming,

    /// Interarrival distribution per travel direction.
    pub arrivals: PerDirection<ArrivalDist>,

    /// Chance, in percent, that a queued vehicle runs a yellow light.
    pub yellow_advance_percent: u8,
}

impl SimParams {
    /// Check every range rule, reporting the first group that fails.
    pub fn validate(&self) -> CoreResult<()> {
        if self.stop_time == Tick::ZERO {
            return Err(CoreError::Invalid {
                field:  STOP_TIME_FIELD,
                reason: "must be positive".to_string(),
            });
        }
        self.east_west.validate(EAST_WEST_FIELD)?;
        self.north_south.validate(NORTH_SOUTH_FIELD)?;
        for (dir, dist) in self.arrivals.iter() {
            dist.validate(arrival_field(dir))?;
        }
        if self.yellow_advance_percent > 100 {
            return Err(CoreError::Invalid {
                field:  YELLOW_FIELD,
                reason: format!("{} is outside 0..=100", self.yellow_advance_percent),
            });
        }
        Ok(())
    }

    /// How long east-west traffic waits on red: the whole north-south cycle.
    #[inline]
    pub fn east_west_red(&self) -> u64 {
        self.north_south.total()
    }

    /// How long north-south traffic waits on red: the whole east-west cycle.
    #[inline]
    pub fn north_south_red(&self) -> u64 {
        self.east_west.total()
    }

    pub fn timing_for(&self, axis: Axis) -> PhaseTiming {
        match axis {
            Axis::EastWest   => self.east_west,
            Axis::NorthSouth => self.north_south,
        }
    }
}

impl fmt::Display for SimParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Begin Simulation Parameters =====")?;
        writeln!(f, "  Random generator seed: {}", self.seed)?;
        writeln!(f, "  Simulation end time: {}", self.stop_time)?;
        writeln!(
            f,
            "  East-West Timing - Green: {} Yellow: {} Red: {}",
            self.east_west.green,
            self.east_west.yellow,
            self.east_west_red()
        )?;
        writeln!(
            f,
            "  North-South Timing - Green: {} Yellow: {} Red: {}",
            self.north_south.green,
            self.north_south.yellow,
            self.north_south_red()
        )?;
        writeln!(f, "  Arrival Distributions:")?;
        for (dir, dist) in self.arrivals.iter() {
            writeln!(
                f,
                "    {} - Mean: {} StdDev: {}",
                dir.as_str(),
                dist.mean,
                dist.std_dev
            )?;
        }
        writeln!(
            f,
            "  Percentage cars advancing through yellow: {}",
            self.yellow_advance_percent
        )?;
        write!(f, "===== End Simulation Parameters =====")
    }
}
