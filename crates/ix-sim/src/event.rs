//! Scheduled occurrences consumed by the dispatch loop.

use std::fmt;

use ix_core::{Direction, Tick};
use ix_queue::SortKey;

/// What happens when an [`Event`] fires.
///
/// Four arrival kinds (one per direction) and four light transitions, named
/// after the phase they switch *to*.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    ArriveEast,
    ArriveWest,
    ArriveNorth,
    ArriveSouth,
    ChangeToYellowEW,
    ChangeToGreenNS,
    ChangeToYellowNS,
    ChangeToGreenEW,
}

impl EventKind {
    /// The arrival kind for `dir`.
    pub fn arrival(dir: Direction) -> EventKind {
        match dir {
            Direction::East  => EventKind::ArriveEast,
            Direction::West  => EventKind::ArriveWest,
            Direction::North => EventKind::ArriveNorth,
            Direction::South => EventKind::ArriveSouth,
        }
    }

    /// `Some(dir)` for arrival kinds, `None` for light transitions.
    pub fn arrival_direction(self) -> Option<Direction> {
        match self {
            EventKind::ArriveEast  => Some(Direction::East),
            EventKind::ArriveWest  => Some(Direction::West),
            EventKind::ArriveNorth => Some(Direction::North),
            EventKind::ArriveSouth => Some(Direction::South),
            EventKind::ChangeToYellowEW
            | EventKind::ChangeToGreenNS
            | EventKind::ChangeToYellowNS
            | EventKind::ChangeToGreenEW => None,
        }
    }

    #[inline]
    pub fn is_light_change(self) -> bool {
        self.arrival_direction().is_none()
    }

    /// Snake-case label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::ArriveEast       => "arrive_east",
            EventKind::ArriveWest       => "arrive_west",
            EventKind::ArriveNorth      => "arrive_north",
            EventKind::ArriveSouth      => "arrive_south",
            EventKind::ChangeToYellowEW => "change_to_yellow_ew",
            EventKind::ChangeToGreenNS  => "change_to_green_ns",
            EventKind::ChangeToYellowNS => "change_to_yellow_ns",
            EventKind::ChangeToGreenEW  => "change_to_green_ew",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::ArriveEast       => "East-bound arrival",
            EventKind::ArriveWest       => "West-bound arrival",
            EventKind::ArriveNorth      => "North-bound arrival",
            EventKind::ArriveSouth      => "South-bound arrival",
            EventKind::ChangeToYellowEW => "Light change to EW yellow",
            EventKind::ChangeToGreenNS  => "Light change to NS green",
            EventKind::ChangeToYellowNS => "Light change to NS yellow",
            EventKind::ChangeToGreenEW  => "Light change to EW green",
        })
    }
}

/// An immutable `(time, kind)` pair.
///
/// Events are ordered in the pending list by `occurs_at` only; two events
/// with the same time fire in the order they were scheduled.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Event {
    occurs_at: Tick,
    kind:      EventKind,
}

impl Event {
    pub fn new(occurs_at: Tick, kind: EventKind) -> Self {
        Self { occurs_at, kind }
    }

    #[inline]
    pub fn occurs_at(&self) -> Tick {
        self.occurs_at
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl SortKey for Event {
    type Key = Tick;

    #[inline]
    fn sort_key(&self) -> Tick {
        self.occurs_at
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event Type: {} Time: {}", self.kind, self.occurs_at)
    }
}
