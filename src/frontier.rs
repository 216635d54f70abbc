//! The frontier abstraction used by the route search
//!
//! A [`Frontier`] is a min-priority queue of `(priority, item)` pairs. The
//! search only ever needs `push` and `pop`: superseded entries are left in
//! place and skipped when they surface (lazy deletion), so no `decrease_key`
//! is required.
//!
//! Two implementations ship with the crate:
//!
//! - [`BinaryFrontier`](crate::binary_frontier::BinaryFrontier): array-backed
//!   binary min-heap, the default
//! - [`StdFrontier`](crate::std_frontier::StdFrontier): wraps
//!   `std::collections::BinaryHeap`

/// Min-priority queue used as the search frontier.
///
/// Unlike `BinaryHeap`, which stores values directly and pops the maximum,
/// a frontier stores (priority, item) pairs and pops the minimum priority.
///
/// # Example
///
/// ```rust
/// use flight_router::Frontier;
/// use flight_router::binary_frontier::BinaryFrontier;
///
/// let mut frontier = BinaryFrontier::new();
/// frontier.push(150, 'C');
/// frontier.push(100, 'B');
///
/// assert_eq!(frontier.peek(), Some((&100, &'B')));
/// assert_eq!(frontier.pop(), Some((100, 'B')));
/// assert_eq!(frontier.len(), 1);
/// ```
pub trait Frontier<T, P: Ord> {
    /// Creates an empty frontier
    fn new() -> Self;

    /// Creates an empty frontier expecting about `capacity` entries
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized,
    {
        let _ = capacity;
        Self::new()
    }

    /// Returns true if nothing is waiting to be settled
    fn is_empty(&self) -> bool;

    /// Returns the number of entries, stale ones included
    fn len(&self) -> usize;

    /// Inserts an item with the given priority
    ///
    /// # Time Complexity
    /// O(log n) for both shipped implementations.
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and its item without removing it
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and its item
    ///
    /// Ties between equal priorities may come out in any order.
    fn pop(&mut self) -> Option<(P, T)>;
}
