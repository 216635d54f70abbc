//! Cheapest-Flight Routing for Rust
//!
//! This crate ingests directed, priced flights between opaque city
//! identifiers and answers cheapest-price queries using Dijkstra's algorithm
//! over a min-priority frontier.
//!
//! # Features
//!
//! - **Flight graph**: arena of cities with the cheapest direct price per
//!   (source, destination) pair; negative prices are rejected per batch
//! - **Explicit outcomes**: queries return [`Fare::Price`] or
//!   [`Fare::Unreachable`], never a sentinel number
//! - **Checked arithmetic**: path sums never wrap; a sum past [`Price::MAX`]
//!   is dropped during relaxation
//! - **Pluggable frontiers**: any [`Frontier`] implementation can drive the
//!   search; a binary heap and a `std::collections::BinaryHeap` adapter ship
//!   with the crate
//! - **Bounded searches**: optional caps on settled cities and frontier size
//!
//! # Example
//!
//! ```rust
//! use flight_router::{Fare, Flight, FlightRouter, Price};
//!
//! let mut router = FlightRouter::new();
//! router
//!     .load_flights(vec![
//!         Flight::new("A", "B", 100),
//!         Flight::new("A", "C", 150),
//!         Flight::new("B", "C", 40),
//!         Flight::new("B", "D", 200),
//!         Flight::new("C", "D", 100),
//!         Flight::new("C", "E", 120),
//!         Flight::new("D", "E", 80),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(router.cheapest_price(&"A", &"E").unwrap(), Fare::Price(Price::new(260)));
//! assert_eq!(router.cheapest_price(&"E", &"A").unwrap(), Fare::Unreachable);
//! ```

pub mod binary_frontier;
pub mod config;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod price;
pub mod router;
pub mod search;
pub mod std_frontier;

// Re-export the main types for convenience
pub use config::SearchConfig;
pub use error::{Result, RouterError};
pub use frontier::Frontier;
pub use graph::{City, CityId, Flight, FlightGraph};
pub use price::{Fare, Price};
pub use router::FlightRouter;
pub use search::{cheapest, PriceTable, Route, Search};
