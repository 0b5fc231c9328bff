//! Slab-backed doubly-linked node storage shared by both containers.
//!
//! Nodes live in a [`Slab`] and refer to their neighbours by slab key
//! instead of by pointer.  Keys vacated by a removal are handed out again by
//! the next insertion, so the arena stays bounded by the peak length.
//!
//! Node keys never leave this crate: [`SortedList`][crate::SortedList]
//! and [`FifoQueue`][crate::FifoQueue] only expose values.

use slab::Slab;

pub(crate) type NodeIdx = usize;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev:  Option<NodeIdx>,
    next:  Option<NodeIdx>,
}

/// A doubly-linked sequence of values stored in a slab.
#[derive(Clone, Debug)]
pub(crate) struct LinkedNodes<T> {
    nodes: Slab<Node<T>>,
    head:  Option<NodeIdx>,
    tail:  Option<NodeIdx>,
}

impl<T> Default for LinkedNodes<T> {
    fn default() -> Self {
        Self {
            nodes: Slab::new(),
            head:  None,
            tail:  None,
        }
    }
}

impl<T> LinkedNodes<T> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<NodeIdx> {
        self.head
    }

    #[inline]
    pub(crate) fn value(&self, idx: NodeIdx) -> &T {
        &self.node(idx).value
    }

    #[inline]
    pub(crate) fn next_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.node(idx).next
    }

    /// Splice `value` in immediately before `before`, or at the tail when
    /// `before` is `None`.  Returns the new node's index.
    pub(crate) fn link_before(&mut self, before: Option<NodeIdx>, value: T) -> NodeIdx {
        let prev = match before {
            Some(b) => self.node(b).prev,
            None    => self.tail,
        };
        let idx = self.nodes.insert(Node { value, prev, next: before });

        match prev {
            Some(p) => self.node_mut(p).next = Some(idx),
            None    => self.head = Some(idx),
        }
        match before {
            Some(b) => self.node_mut(b).prev = Some(idx),
            None    => self.tail = Some(idx),
        }
        idx
    }

    /// Detach the node at `idx` from its neighbours and return its value.
    pub(crate) fn unlink(&mut self, idx: NodeIdx) -> T {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None    => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None    => self.tail = prev,
        }
        self.nodes.remove(idx).value
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Drop every value by repeated front removal, then release the slab's
    /// vacant entries.
    pub(crate) fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.nodes.clear();
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes:     self,
            front:     self.head,
            back:      self.tail,
            remaining: self.nodes.len(),
        }
    }

    fn node(&self, idx: NodeIdx) -> &Node<T> {
        &self.nodes[idx]
    }

    fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        &mut self.nodes[idx]
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Borrowing iterator over a linked container, head to tail.
///
/// Reverse it with `.rev()` to walk tail to head.
pub struct Iter<'a, T> {
    nodes:     &'a LinkedNodes<T>,
    front:     Option<NodeIdx>,
    back:      Option<NodeIdx>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let nodes = self.nodes;
        let node = nodes.node(idx);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let nodes = self.nodes;
        let node = nodes.node(idx);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
