//! A vehicle waiting at (or passing through) the intersection.

use std::fmt;

use ix_core::{Direction, Tick, VehicleId};

/// Arrival record for one vehicle.
///
/// Created by the engine when an arrival event fires; owned by the
/// directional queue it joins until it advances through the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Vehicle {
    id:         VehicleId,
    direction:  Direction,
    arrived_at: Tick,
}

impl Vehicle {
    pub(crate) fn new(id: VehicleId, direction: Direction, arrived_at: Tick) -> Self {
        Self { id, direction, arrived_at }
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn arrived_at(&self) -> Tick {
        self.arrived_at
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {} ({} at {})", self.id, self.direction, self.arrived_at)
    }
}
