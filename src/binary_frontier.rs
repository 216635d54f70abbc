//! Binary min-heap frontier
//!
//! The default frontier for route searches. Entries are laid out as an
//! implicit binary tree; the minimum is always at index 0. Searches size it
//! up front from the graph's city count.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |

use crate::frontier::Frontier;

/// Array-backed binary min-heap.
///
/// Priorities and items are kept in parallel vectors so that sifting only
/// reads the priorities. Slot `i` of both vectors is one entry.
#[derive(Debug, Clone)]
pub struct BinaryFrontier<T, P: Ord> {
    priorities: Vec<P>,
    items: Vec<T>,
}

impl<T, P: Ord> Frontier<T, P> for BinaryFrontier<T, P> {
    fn new() -> Self {
        Self::with_capacity(0)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            priorities: Vec::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    fn len(&self) -> usize {
        self.priorities.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.priorities.push(priority);
        self.items.push(item);
        self.sift_up(self.priorities.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.priorities.first().zip(self.items.first())
    }

    fn pop(&mut self) -> Option<(P, T)> {
        if self.priorities.is_empty() {
            return None;
        }
        // swap_remove moves the last leaf into the root.
        let min = (self.priorities.swap_remove(0), self.items.swap_remove(0));
        self.sift_down(0);
        Some(min)
    }
}

impl<T, P: Ord> BinaryFrontier<T, P> {
    /// Number of entries the frontier can hold before reallocating.
    pub fn capacity(&self) -> usize {
        self.priorities.capacity().min(self.items.capacity())
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.priorities.swap(a, b);
        self.items.swap(a, b);
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.priorities[parent] <= self.priorities[child] {
                return;
            }
            self.exchange(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.priorities.len();
        let mut child = 2 * parent + 1;
        while child < len {
            // Pick the cheaper of the two children.
            if child + 1 < len && self.priorities[child + 1] < self.priorities[child] {
                child += 1;
            }
            if self.priorities[parent] <= self.priorities[child] {
                return;
            }
            self.exchange(parent, child);
            parent = child;
            child = 2 * parent + 1;
        }
    }
}

impl<T, P: Ord> Default for BinaryFrontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
