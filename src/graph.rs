//! Flight graph construction
//!
//! A [`FlightGraph`] is an arena of cities. Every city named by a flight,
//! as source or destination, is assigned a dense [`CityId`] and gets its
//! own route table, possibly empty. Route tables map a destination id to the
//! cheapest direct price seen for that pair.
//!
//! # Ingestion rules
//!
//! - The first flight for a (source, destination) pair sets its price; later
//!   flights for the same pair can only lower it.
//! - A negative price rejects the whole batch and leaves the graph as it was.
//! - Ingesting into a non-empty graph merges; call [`FlightGraph::clear`]
//!   first to replace.
//!
//! # Example
//!
//! ```rust
//! use flight_router::graph::{Flight, FlightGraph};
//! use flight_router::price::Price;
//!
//! let graph = FlightGraph::build(vec![
//!     Flight::new("A", "B", 100),
//!     Flight::new("A", "B", 80),
//! ])
//! .unwrap();
//!
//! assert_eq!(graph.city_count(), 2);
//! assert_eq!(graph.direct_price(&"A", &"B"), Some(Price::new(80)));
//! assert_eq!(graph.direct_price(&"B", &"A"), None);
//! ```

use crate::error::{Result, RouterError};
use crate::price::Price;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can identify a city.
///
/// Identifiers are opaque: they only need to be compared, hashed and
/// cloned. `Debug` is used when reporting a rejected flight.
pub trait City: Clone + Eq + Hash + Debug {}

impl<T> City for T where T: Clone + Eq + Hash + Debug {}

/// Dense index of a city inside one [`FlightGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(usize);

impl CityId {
    /// Position of the city in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single offered flight, as delivered by a loader.
///
/// The price is kept signed so that bad input can be reported instead of
/// being silently unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight<C> {
    /// Departure city
    pub source: C,
    /// Arrival city
    pub destination: C,
    /// Ticket price in the smallest currency unit
    pub price: i64,
}

impl<C> Flight<C> {
    /// Creates a flight.
    pub fn new(source: C, destination: C, price: i64) -> Self {
        Flight {
            source,
            destination,
            price,
        }
    }
}

/// Cheapest direct prices between cities.
#[derive(Debug, Clone)]
pub struct FlightGraph<C> {
    /// Maps city id to identifier
    cities: Vec<C>,
    /// Maps identifier to city id
    index: FxHashMap<C, CityId>,
    /// Per source city, destination id to cheapest direct price
    routes: Vec<FxHashMap<CityId, Price>>,
}

impl<C: City> FlightGraph<C> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        FlightGraph {
            cities: Vec::new(),
            index: FxHashMap::default(),
            routes: Vec::new(),
        }
    }

    /// Builds a graph from a batch of flights.
    ///
    /// # Errors
    /// Returns [`RouterError::NegativePrice`] for the first flight with a
    /// negative price.
    pub fn build<I>(flights: I) -> Result<Self>
    where
        I: IntoIterator<Item = Flight<C>>,
    {
        let mut graph = Self::new();
        graph.ingest(flights)?;
        Ok(graph)
    }

    /// Merges a batch of flights into the graph.
    ///
    /// The batch is validated before anything is inserted, so on error the
    /// graph is unchanged. Returns the number of flights ingested.
    pub fn ingest<I>(&mut self, flights: I) -> Result<usize>
    where
        I: IntoIterator<Item = Flight<C>>,
    {
        let batch = validate(flights)?;
        let count = batch.len();

        for (source, destination, price) in batch {
            let from = self.intern(source);
            let to = self.intern(destination);
            self.routes[from.0]
                .entry(to)
                .and_modify(|best| {
                    if price < *best {
                        *best = price;
                    }
                })
                .or_insert(price);
        }

        tracing::debug!(
            flights = count,
            cities = self.city_count(),
            routes = self.route_count(),
            "ingested flight batch"
        );
        Ok(count)
    }

    /// Removes every city and route.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.index.clear();
        self.routes.clear();
    }

    /// Returns the id of a city, assigning a new one if unseen.
    fn intern(&mut self, city: C) -> CityId {
        if let Some(&id) = self.index.get(&city) {
            return id;
        }
        let id = CityId(self.cities.len());
        self.index.insert(city.clone(), id);
        self.cities.push(city);
        self.routes.push(FxHashMap::default());
        id
    }

    /// Number of known cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of distinct (source, destination) pairs.
    pub fn route_count(&self) -> usize {
        self.routes.iter().map(|table| table.len()).sum()
    }

    /// Returns true if no flight has been ingested.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns true if the city appeared in any ingested flight.
    pub fn contains_city(&self, city: &C) -> bool {
        self.index.contains_key(city)
    }

    /// Looks up the id of a known city.
    pub fn city_id(&self, city: &C) -> Option<CityId> {
        self.index.get(city).copied()
    }

    /// Looks up the identifier behind an id.
    pub fn city(&self, id: CityId) -> Option<&C> {
        self.cities.get(id.0)
    }

    /// Iterates over all known cities in id order.
    pub fn cities(&self) -> impl Iterator<Item = &C> + '_ {
        self.cities.iter()
    }

    /// Cheapest direct price from `source` to `destination`, if any flight
    /// connects them.
    pub fn direct_price(&self, source: &C, destination: &C) -> Option<Price> {
        let from = self.city_id(source)?;
        let to = self.city_id(destination)?;
        self.routes[from.0].get(&to).copied()
    }

    /// Iterates over the outgoing routes of a city. Unknown ids yield nothing.
    pub fn routes_from(&self, id: CityId) -> impl Iterator<Item = (CityId, Price)> + '_ {
        self.routes
            .get(id.0)
            .into_iter()
            .flat_map(|table| table.iter().map(|(&to, &price)| (to, price)))
    }
}

impl<C: City> Default for FlightGraph<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: City> FromIterator<(C, C, Price)> for FlightGraph<C> {
    /// Builds a graph from already-validated prices.
    fn from_iter<I: IntoIterator<Item = (C, C, Price)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (source, destination, price) in iter {
            let from = graph.intern(source);
            let to = graph.intern(destination);
            let best = graph.routes[from.0].entry(to).or_insert(price);
            if price < *best {
                *best = price;
            }
        }
        graph
    }
}

/// Checks every price in a batch before the graph is touched.
fn validate<C, I>(flights: I) -> Result<Vec<(C, C, Price)>>
where
    C: City,
    I: IntoIterator<Item = Flight<C>>,
{
    flights
        .into_iter()
        .map(|flight| match Price::from_signed(flight.price) {
            Some(price) => Ok((flight.source, flight.destination, price)),
            None => {
                tracing::warn!(
                    source = ?flight.source,
                    destination = ?flight.destination,
                    price = flight.price,
                    "rejecting flight batch with negative price"
                );
                Err(RouterError::NegativePrice {
                    source_city: format!("{:?}", flight.source),
                    destination_city: format!("{:?}", flight.destination),
                    price: flight.price,
                })
            }
        })
        .collect()
}
