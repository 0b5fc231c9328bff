//! `FifoQueue` — the vehicles waiting in one travel direction.

use std::fmt;

use crate::node::{Iter, LinkedNodes};

/// First-in, first-out queue: enqueue at the tail, dequeue from the head.
///
/// The length is cached and updated by every mutation, so [`len`][Self::len]
/// is O(1).
#[derive(Clone)]
pub struct FifoQueue<T> {
    nodes: LinkedNodes<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self { nodes: LinkedNodes::default() }
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` at the tail.  Always succeeds.
    pub fn enqueue(&mut self, value: T) {
        self.nodes.link_before(None, value);
    }

    /// Remove and return the head value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.nodes.pop_front()
    }

    /// The value that the next [`dequeue`][Self::dequeue] would return.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.head().map(|idx| self.nodes.value(idx))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Drain the queue by repeated dequeue.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate head (next to leave) to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.nodes.iter()
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
