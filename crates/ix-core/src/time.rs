//! Simulation time model.
//!
//! Time is a non-negative integer `Tick`.  The clock is event-driven: it
//! jumps straight to the occurrence time of the next consumed event, so
//! there is no per-tick stepping and no mapping to wall-clock time.
//! Integer ticks keep all schedule arithmetic exact.

use std::fmt;

/// An absolute simulation time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
