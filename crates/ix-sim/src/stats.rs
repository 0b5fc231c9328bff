//! Running counters kept by the engine and reported at the end of a run.

use std::fmt;

use ix_core::{Direction, PerDirection};

/// Counters for one travel direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DirectionStats {
    /// Longest queue observed right after an arrival.
    pub longest_queue:  usize,
    /// Vehicles that have advanced through the intersection.
    pub total_advanced: u64,
    /// Vehicles that have arrived.  Always `queued + total_advanced`.
    pub total_arrived:  u64,
}

/// Per-direction statistics for a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Statistics {
    pub per_direction: PerDirection<DirectionStats>,
}

impl Statistics {
    #[inline]
    pub fn get(&self, dir: Direction) -> &DirectionStats {
        &self.per_direction[dir]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, dir: Direction) -> &mut DirectionStats {
        &mut self.per_direction[dir]
    }

    pub fn total_advanced(&self) -> u64 {
        self.per_direction.iter().map(|(_, s)| s.total_advanced).sum()
    }

    pub fn total_arrived(&self) -> u64 {
        self.per_direction.iter().map(|(_, s)| s.total_arrived).sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Begin Simulation Statistics =====")?;
        for (dir, s) in self.per_direction.iter() {
            writeln!(f, "  Longest {dir} queue: {}", s.longest_queue)?;
        }
        for (dir, s) in self.per_direction.iter() {
            writeln!(f, "  Total cars advanced {dir}: {}", s.total_advanced)?;
        }
        write!(f, "===== End Simulation Statistics =====")
    }
}
