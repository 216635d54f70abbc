//! Frontier backed by `std::collections::BinaryHeap`
//!
//! `BinaryHeap` is a max-heap that orders whole values. [`StdFrontier`]
//! wraps each pair in an entry whose ordering is the reverse of its
//! priority, so the item type needs no `Ord` of its own.

use crate::frontier::Frontier;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T, P> {
    priority: P,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the max-heap then surfaces the lowest priority.
        other.priority.cmp(&self.priority)
    }
}

/// Min-priority frontier on top of the standard library heap.
pub struct StdFrontier<T, P: Ord> {
    heap: BinaryHeap<Entry<T, P>>,
}

impl<T, P: Ord> Frontier<T, P> for StdFrontier<T, P> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.heap.push(Entry { priority, item });
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.heap.peek().map(|entry| (&entry.priority, &entry.item))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }
}

impl<T, P: Ord> Default for StdFrontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
