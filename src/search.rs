//! Cheapest-price search over a [`FlightGraph`]
//!
//! All queries run the same Dijkstra loop over a min-priority
//! [`Frontier`] keyed by tentative price:
//!
//! 1. Every known city starts without a price except the source, at zero.
//! 2. The cheapest frontier entry is popped. If its price is higher than the
//!    best known price for that city, it was superseded and is skipped. There
//!    is no visited set; superseded entries simply stay in the frontier until
//!    they surface (lazy deletion).
//! 3. Each outgoing route is relaxed. A strictly cheaper candidate replaces
//!    the tentative price and is pushed onto the frontier.
//!
//! Point-to-point queries stop as soon as the destination is popped. That
//! only fixes the destination's price, so [`price_table`] and
//! [`reachable_within`] always drain the frontier.
//!
//! Relaxation uses checked addition. A candidate whose sum does not fit in
//! a [`Price`] is dropped rather than wrapped, so a city whose every path
//! overflows is unreachable and a cheap path is never hidden by an expensive
//! one.
//!
//! Unknown cities are treated as having no flights: they reach only
//! themselves. A query from a city to itself costs zero whether or not the
//! city is in the graph.
//!
//! # Example
//!
//! ```rust
//! use flight_router::graph::{Flight, FlightGraph};
//! use flight_router::price::{Fare, Price};
//! use flight_router::search::cheapest;
//!
//! let graph = FlightGraph::build(vec![
//!     Flight::new("A", "B", 100),
//!     Flight::new("A", "C", 150),
//!     Flight::new("B", "C", 40),
//! ])
//! .unwrap();
//!
//! assert_eq!(cheapest(&graph, &"A", &"C").unwrap(), Fare::Price(Price::new(140)));
//! assert_eq!(cheapest(&graph, &"C", &"A").unwrap(), Fare::Unreachable);
//! assert_eq!(cheapest(&graph, &"Z", &"Z").unwrap(), Fare::Price(Price::ZERO));
//! ```

use crate::binary_frontier::BinaryFrontier;
use crate::config::SearchConfig;
use crate::error::{Result, RouterError};
use crate::frontier::Frontier;
use crate::graph::{City, CityId, FlightGraph};
use crate::price::{Fare, Price};
use rustc_hash::FxHashMap;

/// A cheapest itinerary: the cities visited, both endpoints included, and
/// the total price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<C> {
    /// Cities from source to destination
    pub cities: Vec<C>,
    /// Sum of the direct prices along the way
    pub price: Price,
}

impl<C> Route<C> {
    /// Number of flights taken.
    pub fn legs(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}

/// Cheapest prices from one source to every city it can reach.
#[derive(Debug, Clone)]
pub struct PriceTable<C: City> {
    source: C,
    prices: FxHashMap<C, Price>,
}

impl<C: City> PriceTable<C> {
    /// The city the table was computed from.
    pub fn source(&self) -> &C {
        &self.source
    }

    /// Cheapest fare to `city`.
    pub fn fare(&self, city: &C) -> Fare {
        self.prices.get(city).copied().into()
    }

    /// Number of reachable cities, the source included.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false: the source reaches itself.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over reachable cities and their prices in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, Price)> + '_ {
        self.prices.iter().map(|(city, &price)| (city, price))
    }
}

/// Tentative prices and predecessors left behind by one search.
struct Labels {
    best: Vec<Option<Price>>,
    came_from: Vec<Option<CityId>>,
}

impl Labels {
    fn price(&self, id: CityId) -> Option<Price> {
        self.best.get(id.index()).copied().flatten()
    }

    /// Walks predecessor links back from `target`.
    fn path_to(&self, target: CityId) -> Vec<CityId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.came_from[current.index()] {
            // A predecessor chain never revisits a city under nonnegative prices.
            if path.len() > self.came_from.len() {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// A configured search over one graph.
///
/// ```rust
/// use flight_router::config::SearchConfig;
/// use flight_router::graph::{Flight, FlightGraph};
/// use flight_router::search::Search;
///
/// let graph = FlightGraph::build(vec![Flight::new(1u32, 2, 10), Flight::new(2, 3, 5)]).unwrap();
/// let search = Search::new(&graph).config(SearchConfig::default().max_settled(1));
/// assert!(search.cheapest(&1, &3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Search<'g, C: City> {
    graph: &'g FlightGraph<C>,
    config: SearchConfig,
}

impl<'g, C: City> Search<'g, C> {
    /// Creates a search with the default configuration.
    pub fn new(graph: &'g FlightGraph<C>) -> Self {
        Search {
            graph,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Cheapest price from `source` to `destination`.
    pub fn cheapest(&self, source: &C, destination: &C) -> Result<Fare> {
        self.cheapest_with::<BinaryFrontier<CityId, Price>>(source, destination)
    }

    /// Same as [`Search::cheapest`], with a caller-chosen frontier.
    pub fn cheapest_with<H>(&self, source: &C, destination: &C) -> Result<Fare>
    where
        H: Frontier<CityId, Price>,
    {
        if source == destination {
            return Ok(Fare::Price(Price::ZERO));
        }
        let Some((from, to)) = self.endpoints(source, destination) else {
            return Ok(Fare::Unreachable);
        };

        let labels = self.run::<H>(from, Some(to), None, |_, _| {})?;
        Ok(labels.price(to).into())
    }

    /// Cheapest itinerary from `source` to `destination`, or `None` if there
    /// is no path.
    pub fn cheapest_route(&self, source: &C, destination: &C) -> Result<Option<Route<C>>> {
        if source == destination {
            return Ok(Some(Route {
                cities: vec![source.clone()],
                price: Price::ZERO,
            }));
        }
        let Some((from, to)) = self.endpoints(source, destination) else {
            return Ok(None);
        };

        let labels = self.run::<BinaryFrontier<CityId, Price>>(from, Some(to), None, |_, _| {})?;
        let Some(price) = labels.price(to) else {
            return Ok(None);
        };
        let cities = labels
            .path_to(to)
            .into_iter()
            .filter_map(|id| self.graph.city(id).cloned())
            .collect();
        Ok(Some(Route { cities, price }))
    }

    /// Cheapest price from `source` to every city it can reach.
    ///
    /// Always drains the frontier, regardless of `early_exit`.
    pub fn price_table(&self, source: &C) -> Result<PriceTable<C>> {
        let mut prices = FxHashMap::default();
        prices.insert(source.clone(), Price::ZERO);

        if let Some(from) = self.graph.city_id(source) {
            self.run::<BinaryFrontier<CityId, Price>>(from, None, None, |id, price| {
                if let Some(city) = self.graph.city(id) {
                    prices.insert(city.clone(), price);
                }
            })?;
        }

        Ok(PriceTable {
            source: source.clone(),
            prices,
        })
    }

    /// Every city whose cheapest price from `source` is at most `budget`,
    /// cheapest first.
    pub fn reachable_within(&self, source: &C, budget: Price) -> Result<Vec<(C, Price)>> {
        let Some(from) = self.graph.city_id(source) else {
            return Ok(vec![(source.clone(), Price::ZERO)]);
        };

        let mut reachable = Vec::new();
        self.run::<BinaryFrontier<CityId, Price>>(from, None, Some(budget), |id, price| {
            if let Some(city) = self.graph.city(id) {
                reachable.push((city.clone(), price));
            }
        })?;
        Ok(reachable)
    }

    fn endpoints(&self, source: &C, destination: &C) -> Option<(CityId, CityId)> {
        let endpoints = self
            .graph
            .city_id(source)
            .zip(self.graph.city_id(destination));
        if endpoints.is_none() {
            tracing::trace!(?source, ?destination, "endpoint not in graph");
        }
        endpoints
    }

    /// The shared Dijkstra loop.
    ///
    /// `target` enables early exit when the config allows it. `budget`
    /// drops candidates above it. `on_settle` sees each city once, in
    /// nondecreasing price order.
    fn run<H>(
        &self,
        source: CityId,
        target: Option<CityId>,
        budget: Option<Price>,
        mut on_settle: impl FnMut(CityId, Price),
    ) -> Result<Labels>
    where
        H: Frontier<CityId, Price>,
    {
        let n = self.graph.city_count();
        let mut labels = Labels {
            best: vec![None; n],
            came_from: vec![None; n],
        };
        let mut frontier = H::with_capacity(n);
        let mut settled = 0usize;

        labels.best[source.index()] = Some(Price::ZERO);
        frontier.push(Price::ZERO, source);

        while let Some((price, city)) = frontier.pop() {
            if labels.best[city.index()] != Some(price) {
                continue;
            }

            if let Some(max) = self.config.max_settled {
                if settled >= max {
                    return Err(limit_exceeded("max_settled", max));
                }
            }
            settled += 1;
            on_settle(city, price);

            if self.config.early_exit && target == Some(city) {
                break;
            }

            for (next, route_price) in self.graph.routes_from(city) {
                // A sum past `Price::MAX` can never beat a tentative price.
                let Some(candidate) = price.checked_add(route_price) else {
                    continue;
                };

                if budget.is_some_and(|budget| candidate > budget) {
                    continue;
                }

                let slot = &mut labels.best[next.index()];
                if slot.map_or(true, |best| candidate < best) {
                    *slot = Some(candidate);
                    labels.came_from[next.index()] = Some(city);
                    frontier.push(candidate, next);

                    if let Some(max) = self.config.max_frontier {
                        if frontier.len() > max {
                            return Err(limit_exceeded("max_frontier", max));
                        }
                    }
                }
            }
        }

        tracing::trace!(settled, remaining = frontier.len(), "search finished");
        Ok(labels)
    }
}

fn limit_exceeded(limit: &'static str, value: usize) -> RouterError {
    tracing::debug!(limit, value, "search aborted at limit");
    RouterError::SearchLimitExceeded { limit, value }
}

/// Cheapest price from `source` to `destination` with the default
/// configuration and frontier.
pub fn cheapest<C: City>(graph: &FlightGraph<C>, source: &C, destination: &C) -> Result<Fare> {
    Search::new(graph).cheapest(source, destination)
}

/// [`cheapest`] with a caller-chosen frontier.
///
/// ```rust
/// use flight_router::graph::{Flight, FlightGraph};
/// use flight_router::price::{Fare, Price};
/// use flight_router::search::cheapest_with;
/// use flight_router::std_frontier::StdFrontier;
///
/// let graph = FlightGraph::build(vec![Flight::new('A', 'B', 7)]).unwrap();
/// let fare = cheapest_with::<_, StdFrontier<_, _>>(&graph, &'A', &'B').unwrap();
/// assert_eq!(fare, Fare::Price(Price::new(7)));
/// ```
pub fn cheapest_with<C, H>(graph: &FlightGraph<C>, source: &C, destination: &C) -> Result<Fare>
where
    C: City,
    H: Frontier<CityId, Price>,
{
    Search::new(graph).cheapest_with::<H>(source, destination)
}

/// Cheapest itinerary with the default configuration.
pub fn cheapest_route<C: City>(
    graph: &FlightGraph<C>,
    source: &C,
    destination: &C,
) -> Result<Option<Route<C>>> {
    Search::new(graph).cheapest_route(source, destination)
}

/// Single-source price table with the default configuration.
pub fn price_table<C: City>(graph: &FlightGraph<C>, source: &C) -> Result<PriceTable<C>> {
    Search::new(graph).price_table(source)
}

/// Cities reachable within `budget` with the default configuration.
pub fn reachable_within<C: City>(
    graph: &FlightGraph<C>,
    source: &C,
    budget: Price,
) -> Result<Vec<(C, Price)>> {
    Search::new(graph).reachable_within(source, budget)
}
