//! Travel directions and the two axes of the intersection.
//!
//! The direction set is closed: every `match` over [`Direction`] is
//! exhaustive, so adding a direction is a compile error everywhere it
//! matters rather than a silent string mismatch.

use std::fmt;
use std::ops::{Index, IndexMut};

/// The direction a vehicle is travelling in when it reaches the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// All four directions in reporting order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// The axis whose light governs this direction.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West   => Axis::EastWest,
            Direction::North | Direction::South => Axis::NorthSouth,
        }
    }

    /// Position in [`Direction::ALL`]; used to index [`PerDirection`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::East  => 0,
            Direction::West  => 1,
            Direction::North => 2,
            Direction::South => 3,
        }
    }

    /// Lower-case label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East  => "east",
            Direction::West  => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }
}

impl fmt::Display for Direction {
    /// Renders as `east-bound`, `north-bound`, …
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bound", self.as_str())
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// A pair of opposing directions that share one signal head.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    EastWest,
    NorthSouth,
}

impl Axis {
    /// The two directions on this axis, in processing order.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::EastWest   => [Direction::East, Direction::West],
            Axis::NorthSouth => [Direction::North, Direction::South],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::EastWest   => "east-west",
            Axis::NorthSouth => "north-south",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PerDirection ──────────────────────────────────────────────────────────────

/// One `T` per travel direction, indexable by [`Direction`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerDirection<T>([T; 4]);

impl<T> PerDirection<T> {
    /// Build from values in [`Direction::ALL`] order.
    pub fn new(east: T, west: T, north: T, south: T) -> Self {
        Self([east, west, north, south])
    }

    /// Build by calling `f` once per direction.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self(Direction::ALL.map(&mut f))
    }

    /// Iterate `(direction, &value)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;
    #[inline]
    fn index(&self, dir: Direction) -> &T {
        &self.0[dir.index()]
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    #[inline]
    fn index_mut(&mut self, dir: Direction) -> &mut T {
        &mut self.0[dir.index()]
    }
}
