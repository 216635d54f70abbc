//! Search configuration
//!
//! [`SearchConfig`] bounds how much work one query may do and controls
//! whether a point-to-point search stops as soon as the destination is
//! settled. It derives `serde` so it can live in whatever configuration file
//! the embedding service already reads; missing fields take their defaults.
//!
//! ```rust
//! use flight_router::config::SearchConfig;
//!
//! let config = SearchConfig::default().max_settled(10_000).max_frontier(50_000);
//! assert!(config.early_exit);
//! assert_eq!(config.max_settled, Some(10_000));
//! ```

use serde::{Deserialize, Serialize};

/// Limits and switches for a route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop a point-to-point search once the destination is settled.
    pub early_exit: bool,
    /// Maximum number of cities a search may settle.
    pub max_settled: Option<usize>,
    /// Maximum number of entries, stale ones included, on the frontier.
    pub max_frontier: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            early_exit: true,
            max_settled: None,
            max_frontier: None,
        }
    }
}

impl SearchConfig {
    /// Sets whether a point-to-point search stops at the destination.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Sets the maximum number of settled cities.
    pub fn max_settled(mut self, count: usize) -> Self {
        self.max_settled = Some(count);
        self
    }

    /// Sets the maximum frontier size.
    pub fn max_frontier(mut self, count: usize) -> Self {
        self.max_frontier = Some(count);
        self
    }

    /// Returns true if neither limit is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_settled.is_none() && self.max_frontier.is_none()
    }
}
