//! Error type for graph construction and route queries
//!
//! An unreachable destination is not an error; it is reported as
//! [`Fare::Unreachable`](crate::price::Fare::Unreachable). The variants here
//! cover input that breaks the nonnegative-weight precondition and searches
//! that cannot complete.

use thiserror::Error;

/// Errors returned by the router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A flight was offered with a negative price. Dijkstra's algorithm is only
    /// correct for nonnegative weights, so the whole batch is rejected.
    #[error("flight {source_city} -> {destination_city} has negative price {price}")]
    NegativePrice {
        /// Debug rendering of the source city
        source_city: String,
        /// Debug rendering of the destination city
        destination_city: String,
        /// The offending raw price
        price: i64,
    },

    /// A configured search limit was reached before the search finished.
    #[error("search limit `{limit}` exceeded ({value})")]
    SearchLimitExceeded {
        /// Name of the limit that tripped
        limit: &'static str,
        /// The configured value of that limit
        value: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouterError>;
