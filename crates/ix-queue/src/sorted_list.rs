//! `SortedList` — the time-ordered pending-event list.
//!
//! # Ordering rule
//!
//! Insertion walks from the head past every element whose key is less than
//! *or equal to* the new key and splices the new value in front of the first
//! strictly greater element.  Equal keys therefore keep their insertion
//! order, which is what makes same-time events fire first-scheduled
//! first-handled.
//!
//! # Performance note
//!
//! Insert is an O(n) scan from the head.  The engine keeps at most one
//! pending arrival per direction plus one pending light change, so n stays
//! at five.

use std::fmt;

use crate::node::{Iter, LinkedNodes};

/// Supplies the ordering key for values held in a [`SortedList`].
///
/// Only the key participates in ordering, so two values can share a key
/// without being equal (e.g. two events scheduled for the same tick).
pub trait SortKey {
    type Key: Ord;

    fn sort_key(&self) -> Self::Key;
}

macro_rules! self_keyed {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                type Key = $t;
                #[inline]
                fn sort_key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

self_keyed!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A list kept in non-decreasing key order at all times.
#[derive(Clone)]
pub struct SortedList<T> {
    nodes: LinkedNodes<T>,
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self { nodes: LinkedNodes::default() }
    }
}

impl<T: SortKey> SortedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` after every element with a key ≤ its own.
    ///
    /// Never rejects a value.
    pub fn insert(&mut self, value: T) {
        let key = value.sort_key();
        let mut cursor = self.nodes.head();
        while let Some(idx) = cursor {
            if self.nodes.value(idx).sort_key() > key {
                break;
            }
            cursor = self.nodes.next_of(idx);
        }
        self.nodes.link_before(cursor, value);
    }
}

impl<T> SortedList<T> {
    /// Remove and return the element with the smallest key, or `None` if the
    /// list is empty.
    pub fn remove_front(&mut self) -> Option<T> {
        self.nodes.pop_front()
    }

    /// Remove and return the element with the largest key, or `None` if the
    /// list is empty.
    pub fn remove_back(&mut self) -> Option<T> {
        self.nodes.pop_back()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.nodes.head().map(|idx| self.nodes.value(idx))
    }

    /// The element at position `index` counting from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nodes.iter().nth(index)
    }

    /// Number of elements currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Release every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate front (smallest key) to back.  Use `.rev()` for back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        self.nodes.iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: SortKey> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
