//! Property-based tests using proptest
//!
//! Random flight networks over a small set of cities are generated and the
//! query results are checked against properties that must hold for any
//! network: zero-cost self queries, the triangle inequality, rebuild
//! idempotence, agreement between frontiers and between early-exit and
//! fully drained searches, and consistency of reconstructed routes.

use flight_router::binary_frontier::BinaryFrontier;
use flight_router::search::{cheapest_route, cheapest_with, price_table, reachable_within};
use flight_router::std_frontier::StdFrontier;
use flight_router::{cheapest, Fare, Flight, FlightGraph, Price, Search, SearchConfig};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

const CITIES: u8 = 8;

fn flights_strategy() -> impl Strategy<Value = Vec<(u8, u8, i64)>> {
    prop::collection::vec((0..CITIES, 0..CITIES, 0i64..1_000), 0..40)
}

/// Flights whose prices are either small or close to `i64::MAX`, so that
/// paths of three or more expensive legs no longer fit in a `Price`.
fn huge_flights_strategy() -> impl Strategy<Value = Vec<(u8, u8, i64)>> {
    let price = prop_oneof![0i64..1_000, (i64::MAX - 1_000)..=i64::MAX];
    prop::collection::vec((0..CITIES, 0..CITIES, price), 0..40)
}

fn build(edges: &[(u8, u8, i64)]) -> FlightGraph<u8> {
    FlightGraph::build(edges.iter().map(|&(s, d, p)| Flight::new(s, d, p))).unwrap()
}

/// Reference answer by Bellman-Ford style relaxation over the raw flights.
///
/// Sums are kept in `u128` and only prices that fit in a `u64` count as
/// reachable, matching the router's treatment of overflowing paths.
fn relax_to_fixpoint(edges: &[(u8, u8, i64)], source: u8) -> Vec<Option<u64>> {
    let mut best: Vec<Option<u128>> = vec![None; CITIES as usize];
    best[source as usize] = Some(0);
    for _ in 0..CITIES {
        for &(s, d, p) in edges {
            if let Some(base) = best[s as usize] {
                let candidate = base + p as u128;
                if candidate > u64::MAX as u128 {
                    continue;
                }
                if best[d as usize].map_or(true, |b| candidate < b) {
                    best[d as usize] = Some(candidate);
                }
            }
        }
    }
    best.into_iter().map(|price| price.map(|p| p as u64)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_self_query_is_free(edges in flights_strategy(), city in 0u8..(CITIES + 4)) {
        let g = build(&edges);
        prop_assert_eq!(cheapest(&g, &city, &city).unwrap(), Fare::Price(Price::ZERO));
    }

    #[test]
    fn prop_matches_reference(edges in flights_strategy(), source in 0..CITIES) {
        let g = build(&edges);
        let expected = relax_to_fixpoint(&edges, source);
        for destination in 0..CITIES {
            let fare = cheapest(&g, &source, &destination).unwrap();
            let reference = if source == destination {
                Some(Price::ZERO)
            } else if g.contains_city(&destination) {
                expected[destination as usize].map(Price::new)
            } else {
                None
            };
            prop_assert_eq!(fare, Fare::from(reference), "{} -> {}", source, destination);
        }
    }

    #[test]
    fn prop_triangle_inequality(
        edges in flights_strategy(),
        s in 0..CITIES,
        m in 0..CITIES,
        d in 0..CITIES,
    ) {
        let g = build(&edges);
        let direct = cheapest(&g, &s, &d).unwrap();
        let first = cheapest(&g, &s, &m).unwrap();
        let second = cheapest(&g, &m, &d).unwrap();

        if let (Some(a), Some(b)) = (first.price(), second.price()) {
            let via = a.checked_add(b).unwrap();
            let direct = direct.price();
            prop_assert!(direct.is_some());
            prop_assert!(direct.unwrap() <= via);
        }
    }

    #[test]
    fn prop_rebuild_is_idempotent(edges in flights_strategy()) {
        let first = build(&edges);
        let second = build(&edges);
        for s in 0..CITIES {
            for d in 0..CITIES {
                prop_assert_eq!(
                    cheapest(&first, &s, &d).unwrap(),
                    cheapest(&second, &s, &d).unwrap()
                );
            }
        }
    }

    #[test]
    fn prop_reingesting_same_batch_changes_nothing(edges in flights_strategy()) {
        let once = build(&edges);
        let mut twice = build(&edges);
        twice.ingest(edges.iter().map(|&(s, d, p)| Flight::new(s, d, p))).unwrap();

        prop_assert_eq!(once.city_count(), twice.city_count());
        prop_assert_eq!(once.route_count(), twice.route_count());
        for s in 0..CITIES {
            let a = price_table(&once, &s).unwrap();
            let b = price_table(&twice, &s).unwrap();
            for d in 0..CITIES {
                prop_assert_eq!(a.fare(&d), b.fare(&d));
            }
        }
    }

    #[test]
    fn prop_frontiers_agree(edges in flights_strategy(), s in 0..CITIES, d in 0..CITIES) {
        let g = build(&edges);
        prop_assert_eq!(
            cheapest_with::<_, BinaryFrontier<_, _>>(&g, &s, &d).unwrap(),
            cheapest_with::<_, StdFrontier<_, _>>(&g, &s, &d).unwrap()
        );
    }

    #[test]
    fn prop_early_exit_matches_drain(edges in flights_strategy(), s in 0..CITIES) {
        let g = build(&edges);
        let drained = Search::new(&g).config(SearchConfig::default().early_exit(false));
        let table = price_table(&g, &s).unwrap();
        for d in 0..CITIES {
            let early = cheapest(&g, &s, &d).unwrap();
            prop_assert_eq!(early, drained.cheapest(&s, &d).unwrap());
            prop_assert_eq!(early, table.fare(&d));
        }
    }

    #[test]
    fn prop_huge_prices_match_reference(edges in huge_flights_strategy(), s in 0..CITIES) {
        let g = build(&edges);
        let expected = relax_to_fixpoint(&edges, s);
        let drained = Search::new(&g).config(SearchConfig::default().early_exit(false));
        let table = price_table(&g, &s).unwrap();
        let reachable = reachable_within(&g, &s, Price::MAX).unwrap();
        prop_assert_eq!(reachable.len(), table.len());

        for d in 0..CITIES {
            let early = cheapest(&g, &s, &d).unwrap();
            let reference = if s == d {
                Some(Price::ZERO)
            } else if g.contains_city(&d) {
                expected[d as usize].map(Price::new)
            } else {
                None
            };
            prop_assert_eq!(early, Fare::from(reference), "{} -> {}", s, d);
            prop_assert_eq!(early, drained.cheapest(&s, &d).unwrap());
            prop_assert_eq!(early, cheapest_with::<_, StdFrontier<_, _>>(&g, &s, &d).unwrap());
            prop_assert_eq!(early, table.fare(&d));
        }
    }

    #[test]
    fn prop_route_prices_add_up(edges in flights_strategy(), s in 0..CITIES, d in 0..CITIES) {
        let g = build(&edges);
        let fare = cheapest(&g, &s, &d).unwrap();
        let route = cheapest_route(&g, &s, &d).unwrap();

        match (fare, route) {
            (Fare::Unreachable, None) => {}
            (Fare::Price(price), Some(route)) => {
                prop_assert_eq!(route.price, price);
                prop_assert_eq!(route.cities.first(), Some(&s));
                prop_assert_eq!(route.cities.last(), Some(&d));

                let mut total = Price::ZERO;
                for leg in route.cities.windows(2) {
                    let direct = g.direct_price(&leg[0], &leg[1]);
                    prop_assert!(direct.is_some());
                    total = total.checked_add(direct.unwrap()).unwrap();
                }
                prop_assert_eq!(total, price);
            }
            (fare, route) => {
                prop_assert!(false, "fare {:?} disagrees with route {:?}", fare, route);
            }
        }
    }

    #[test]
    fn prop_reachable_within_is_sorted_and_bounded(
        edges in flights_strategy(),
        s in 0..CITIES,
        budget in 0u64..2_000,
    ) {
        let g = build(&edges);
        let budget = Price::new(budget);
        let reachable = reachable_within(&g, &s, budget).unwrap();

        prop_assert_eq!(reachable.first(), Some(&(s, Price::ZERO)));
        for pair in reachable.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1);
        }
        for (city, price) in &reachable {
            prop_assert!(*price <= budget);
            prop_assert_eq!(cheapest(&g, &s, city).unwrap(), Fare::Price(*price));
        }

        let table = price_table(&g, &s).unwrap();
        let within = table.iter().filter(|(_, price)| *price <= budget).count();
        prop_assert_eq!(within, reachable.len());
    }

    #[test]
    fn prop_negative_price_is_rejected(
        edges in flights_strategy(),
        bad in (0..CITIES, 0..CITIES, -1_000i64..0),
    ) {
        let mut g = build(&edges);
        let before = (g.city_count(), g.route_count());

        let mut batch: Vec<_> = edges.iter().map(|&(s, d, p)| Flight::new(s, d, p)).collect();
        batch.push(Flight::new(bad.0, bad.1, bad.2));

        prop_assert!(g.ingest(batch).is_err());
        prop_assert_eq!((g.city_count(), g.route_count()), before);
    }
}

#[test]
fn test_disjoint_components_are_unreachable() {
    // Two components: 0..4 chained, 4..8 chained.
    let mut edges = Vec::new();
    for i in 0..3u8 {
        edges.push((i, i + 1, 10));
        edges.push((i + 4, i + 5, 10));
    }
    let g = build(&edges);
    for a in 0..4u8 {
        for b in 4..8u8 {
            assert_eq!(cheapest(&g, &a, &b).unwrap(), Fare::Unreachable);
            assert_eq!(cheapest(&g, &b, &a).unwrap(), Fare::Unreachable);
        }
    }
}
