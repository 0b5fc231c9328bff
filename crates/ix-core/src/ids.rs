//! Strongly typed vehicle identity.

use std::fmt;

/// Identity of one vehicle, assigned when it arrives at the intersection.
///
/// Ids are handed out by the engine that owns the vehicle, starting at
/// [`VehicleId::FIRST`] and increasing by one per arrival.  They are never
/// reused within a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u64);

impl VehicleId {
    pub const FIRST: VehicleId = VehicleId(1);

    /// The id handed out after `self`.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0 + 1)
    }
}

impl Default for VehicleId {
    #[inline]
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
