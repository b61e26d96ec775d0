//! Flighthop library entry points.
//!
//! This crate exposes helpers to locate the flight dataset, load airports and
//! routes into memory, build the country-level graph, and run pathfinding and
//! challenge-picking algorithms. Higher-level consumers (CLI, game servers)
//! should only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod challenge;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod stats;

pub use challenge::{
    pick_challenge, qualifying_pairs, sample_pairs_in_range, Challenge, QualifyingPair,
};
pub use dataset::{
    default_data_dir, resolve_data_dir, AirportRecord, FlightData, RouteRecord,
    AIRPORTS_FILENAME, DATA_DIR_ENV, ROUTES_FILENAME,
};
pub use error::{Error, Result};
pub use graph::{build_graph, CountryGraph, CountryId};
pub use output::{ChallengeSummary, RouteStep, RouteSummary};
pub use path::{
    find_exact_path, shortest_path, shortest_path_len, shortest_path_lengths_from,
    ExactPathStatus,
};
pub use routing::{
    neighbouring_countries, plan_challenge, plan_exact_route, plan_route, resolve_country,
    ExactRouteRequest, RoutePlan, RouteRequest,
};
pub use stats::{network_stats, DegreeEntry, LengthBucket, NetworkStats};
