//! Stateful router facade
//!
//! [`FlightRouter`] owns a [`FlightGraph`] and a [`SearchConfig`]. Flights are
//! loaded in batches, typically once per day, and queries run against
//! whatever has been loaded so far.
//!
//! [`FlightRouter::load_flights`] merges into the current graph, so a flight
//! loaded yesterday stays known until the graph is replaced.
//! [`FlightRouter::replace_flights`] swaps in a graph built from the new
//! batch alone.
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
//!         Flight::new("B", "C", 40),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(router.cheapest_price(&"A", &"C").unwrap(), Fare::Price(Price::new(140)));
//! assert_eq!(router.cheapest_price(&"C", &"A").unwrap(), Fare::Unreachable);
//! ```

use crate::config::SearchConfig;
use crate::error::Result;
use crate::graph::{City, Flight, FlightGraph};
use crate::price::{Fare, Price};
use crate::search::{PriceTable, Route, Search};

/// Loads flights and answers cheapest-price queries.
#[derive(Debug, Clone)]
pub struct FlightRouter<C: City> {
    graph: FlightGraph<C>,
    config: SearchConfig,
}

impl<C: City> FlightRouter<C> {
    /// Creates a router with no flights and the default configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Creates a router with no flights and the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        FlightRouter {
            graph: FlightGraph::new(),
            config,
        }
    }

    /// The current search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replaces the search configuration for subsequent queries.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Read access to the loaded graph.
    pub fn graph(&self) -> &FlightGraph<C> {
        &self.graph
    }

    /// Merges a batch of flights into the loaded graph.
    ///
    /// Returns the number of flights in the batch. On error nothing from the
    /// batch is loaded.
    pub fn load_flights<I>(&mut self, flights: I) -> Result<usize>
    where
        I: IntoIterator<Item = Flight<C>>,
    {
        let count = self.graph.ingest(flights)?;
        tracing::info!(
            flights = count,
            cities = self.graph.city_count(),
            "loaded flights"
        );
        Ok(count)
    }

    /// Replaces the loaded graph with one built from `flights` alone.
    ///
    /// On error the previous graph stays in place.
    pub fn replace_flights<I>(&mut self, flights: I) -> Result<usize>
    where
        I: IntoIterator<Item = Flight<C>>,
    {
        let mut graph = FlightGraph::new();
        let count = graph.ingest(flights)?;
        self.graph = graph;
        tracing::info!(
            flights = count,
            cities = self.graph.city_count(),
            "replaced flights"
        );
        Ok(count)
    }

    fn search(&self) -> Search<'_, C> {
        Search::new(&self.graph).config(self.config)
    }

    /// Cheapest total price from `source` to `destination`.
    pub fn cheapest_price(&self, source: &C, destination: &C) -> Result<Fare> {
        self.search().cheapest(source, destination)
    }

    /// Cheapest itinerary from `source` to `destination`.
    pub fn cheapest_route(&self, source: &C, destination: &C) -> Result<Option<Route<C>>> {
        self.search().cheapest_route(source, destination)
    }

    /// Cheapest price from `source` to every reachable city.
    pub fn price_table(&self, source: &C) -> Result<PriceTable<C>> {
        self.search().price_table(source)
    }

    /// Cities reachable from `source` for at most `budget`, cheapest first.
    pub fn reachable_within(&self, source: &C, budget: Price) -> Result<Vec<(C, Price)>> {
        self.search().reachable_within(source, budget)
    }
}

impl<C: City> Default for FlightRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}
