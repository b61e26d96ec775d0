use std::path::PathBuf;

use flighthop_lib::{
    build_graph, find_exact_path, AirportRecord, CountryGraph, CountryId, Error, ExactPathStatus,
    FlightData, RouteRecord,
};

/// Build a graph from country-level connections, one airport per country.
fn graph_of(connections: &[(&str, &str)]) -> CountryGraph {
    let mut airports = Vec::new();
    let mut seen = Vec::new();
    for &(source, destination) in connections {
        for country in [source, destination] {
            if !seen.contains(&country) {
                seen.push(country);
                airports.push(AirportRecord {
                    country: country.to_string(),
                    city: String::new(),
                    iata: country.to_string(),
                });
            }
        }
    }

    let routes: Vec<RouteRecord> = connections
        .iter()
        .map(|&(source, destination)| RouteRecord {
            source: source.to_string(),
            destination: destination.to_string(),
        })
        .collect();

    build_graph(&routes, &airports)
}

fn id(graph: &CountryGraph, name: &str) -> CountryId {
    graph.country_id(name).expect("country present")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[test]
fn request_matching_shortest_length_returns_shortest_route() {
    let graph = graph_of(&[("A", "B"), ("B", "C"), ("A", "C")]);
    let (a, c) = (id(&graph, "A"), id(&graph, "C"));

    let status = find_exact_path(&graph, a, c, 1).expect("valid request");
    assert_eq!(status, ExactPathStatus::Found(vec![a, c]));
}

#[test]
fn longer_request_takes_a_detour() {
    let graph = graph_of(&[("A", "B"), ("B", "C"), ("A", "C")]);
    let (a, b, c) = (id(&graph, "A"), id(&graph, "B"), id(&graph, "C"));

    let status = find_exact_path(&graph, a, c, 2).expect("valid request");
    assert_eq!(status, ExactPathStatus::Found(vec![a, b, c]));
}

#[test]
fn request_below_shortest_length_is_infeasible() {
    let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "D")]);
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    let status = find_exact_path(&graph, a, d, 2).expect("valid request");
    assert_eq!(status, ExactPathStatus::Infeasible);
}

#[test]
fn unreachable_goal_is_infeasible() {
    let graph = graph_of(&[("A", "B"), ("C", "D")]);
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    let status = find_exact_path(&graph, a, d, 3).expect("valid request");
    assert_eq!(status, ExactPathStatus::Infeasible);
}

#[test]
fn walks_may_revisit_intermediate_countries() {
    let graph = graph_of(&[("A", "B"), ("B", "A"), ("B", "C")]);
    let (a, b, c) = (id(&graph, "A"), id(&graph, "B"), id(&graph, "C"));

    let status = find_exact_path(&graph, a, c, 4).expect("valid request");
    assert_eq!(status, ExactPathStatus::Found(vec![a, b, a, b, c]));
}

#[test]
fn goal_is_only_entered_on_the_final_flight() {
    // Every long walk from A to D would have to pass through D itself, so
    // nothing but the direct two-flight route exists.
    let graph = graph_of(&[("A", "C"), ("C", "D"), ("D", "C")]);
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    let status = find_exact_path(&graph, a, d, 4).expect("valid request");
    assert_eq!(status, ExactPathStatus::NotFound);
}

#[test]
fn exhausted_search_reports_not_found() {
    let graph = graph_of(&[("A", "B"), ("B", "C")]);
    let (a, c) = (id(&graph, "A"), id(&graph, "C"));

    let status = find_exact_path(&graph, a, c, 3).expect("valid request");
    assert_eq!(status, ExactPathStatus::NotFound);
}

#[test]
fn equal_endpoints_are_rejected() {
    let graph = graph_of(&[("A", "B")]);
    let a = id(&graph, "A");

    let error = find_exact_path(&graph, a, a, 2).expect_err("invalid request");
    assert!(matches!(error, Error::InvalidPathRequest { .. }));
    assert!(format!("{error}").contains("different countries"));
}

#[test]
fn unknown_countries_are_rejected() {
    let graph = graph_of(&[("A", "B")]);
    let a = id(&graph, "A");

    let error = find_exact_path(&graph, a, 99, 2).expect_err("invalid request");
    assert!(matches!(error, Error::InvalidPathRequest { .. }));
}

#[test]
fn zero_length_is_rejected() {
    let graph = graph_of(&[("A", "B")]);
    let (a, b) = (id(&graph, "A"), id(&graph, "B"));

    let error = find_exact_path(&graph, a, b, 0).expect_err("invalid request");
    assert!(format!("{error}").contains("at least one flight"));
}

#[test]
fn first_walk_in_adjacency_order_wins() {
    let graph = fixture_graph();
    let germany = id(&graph, "Germany");
    let spain = id(&graph, "Spain");

    let status = find_exact_path(&graph, germany, spain, 3).expect("valid request");
    let ExactPathStatus::Found(walk) = status else {
        panic!("expected a three-flight route");
    };

    let names: Vec<&str> = walk
        .iter()
        .map(|&country| graph.country_name(country).unwrap())
        .collect();
    assert_eq!(names, vec!["Germany", "France", "Germany", "Spain"]);
}

#[test]
fn fixture_has_no_two_flight_route_between_neighbours() {
    let graph = fixture_graph();
    let france = id(&graph, "France");
    let germany = id(&graph, "Germany");

    let status = find_exact_path(&graph, france, germany, 2).expect("valid request");
    assert_eq!(status, ExactPathStatus::NotFound);
}

fn fixture_graph() -> CountryGraph {
    let data = FlightData::load(&fixtures_dir()).expect("fixture loads");
    build_graph(&data.routes, &data.airports)
}
