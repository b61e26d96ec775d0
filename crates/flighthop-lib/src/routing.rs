//! Name-level route planning.
//!
//! This module provides:
//! - [`RouteRequest`] / [`ExactRouteRequest`] - high-level planning requests
//! - [`RoutePlan`] - planned route result
//! - [`plan_route`] / [`plan_exact_route`] / [`plan_challenge`] - entry points
//!
//! The graph itself only knows exact canonical country names. This layer owns
//! the forgiving lookup applied to user input: case-insensitive matching,
//! unambiguous substring matching, and fuzzy suggestions on failure.

use rand::Rng;
use serde::Serialize;

use crate::challenge::{pick_challenge, Challenge};
use crate::error::{Error, Result};
use crate::graph::{CountryGraph, CountryId};
use crate::path::{find_exact_path, shortest_path, shortest_path_len, ExactPathStatus};

/// High-level shortest-route request between two countries by name.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Exact-length route request between two countries by name.
#[derive(Debug, Clone)]
pub struct ExactRouteRequest {
    pub from: String,
    pub to: String,
    pub length: usize,
}

impl ExactRouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, length: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: CountryId,
    pub goal: CountryId,
    pub steps: Vec<CountryId>,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a user-supplied country name to an identifier.
///
/// Exact canonical names win. Otherwise a case-insensitive match is accepted,
/// then a case-insensitive substring match when exactly one country contains
/// the input. Anything else fails with suggestions: the substring candidates
/// when the input was ambiguous, fuzzy matches when it was unrecognized.
pub fn resolve_country(graph: &CountryGraph, name: &str) -> Result<CountryId> {
    if let Some(id) = graph.country_id(name) {
        return Ok(id);
    }

    let needle = name.to_lowercase();
    let mut containing = Vec::new();
    for (id, candidate) in graph.country_names().enumerate() {
        let lowered = candidate.to_lowercase();
        if lowered == needle {
            return Ok(id);
        }
        if !needle.is_empty() && lowered.contains(&needle) {
            containing.push(id);
        }
    }

    if containing.len() == 1 {
        return Ok(containing[0]);
    }

    let suggestions = if containing.is_empty() {
        graph.fuzzy_country_matches(name, 3)
    } else {
        containing
            .iter()
            .filter_map(|&id| graph.country_name(id))
            .map(str::to_string)
            .take(3)
            .collect()
    };

    Err(Error::UnknownCountry {
        name: name.to_string(),
        suggestions,
    })
}

/// Compute the shortest route between two countries.
pub fn plan_route(graph: &CountryGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_country(graph, &request.from)?;
    let goal = resolve_country(graph, &request.to)?;

    let steps = shortest_path(graph, start, goal).ok_or_else(|| Error::RouteNotFound {
        start: canonical_name(graph, start),
        goal: canonical_name(graph, goal),
    })?;

    Ok(RoutePlan { start, goal, steps })
}

/// Compute a route of exactly the requested number of flights.
///
/// Maps the engine's search outcome onto user-facing errors: an unreachable
/// goal reports as a missing route, a target below the shortest possible
/// length reports the shortest, and an exhausted search reports not-found.
pub fn plan_exact_route(graph: &CountryGraph, request: &ExactRouteRequest) -> Result<RoutePlan> {
    let start = resolve_country(graph, &request.from)?;
    let goal = resolve_country(graph, &request.to)?;

    match find_exact_path(graph, start, goal, request.length)? {
        ExactPathStatus::Found(steps) => Ok(RoutePlan { start, goal, steps }),
        ExactPathStatus::Infeasible => match shortest_path_len(graph, start, goal) {
            Some(shortest) => Err(Error::ExactLengthInfeasible {
                start: canonical_name(graph, start),
                goal: canonical_name(graph, goal),
                length: request.length,
                shortest,
            }),
            None => Err(Error::RouteNotFound {
                start: canonical_name(graph, start),
                goal: canonical_name(graph, goal),
            }),
        },
        ExactPathStatus::NotFound => Err(Error::ExactLengthNotFound {
            start: canonical_name(graph, start),
            goal: canonical_name(graph, goal),
            length: request.length,
        }),
    }
}

/// Pick a random challenge pair at least `min_length` flights apart.
pub fn plan_challenge<R: Rng + ?Sized>(
    graph: &CountryGraph,
    min_length: usize,
    rng: &mut R,
) -> Result<Challenge> {
    pick_challenge(graph, min_length, rng).ok_or(Error::NoQualifyingPair { min_length })
}

/// Direct destinations from a country, by name, alphabetically sorted.
pub fn neighbouring_countries(graph: &CountryGraph, name: &str) -> Result<Vec<String>> {
    let country = resolve_country(graph, name)?;
    let mut names: Vec<String> = graph
        .neighbours(country)
        .iter()
        .filter_map(|&id| graph.country_name(id))
        .map(str::to_string)
        .collect();
    names.sort_unstable();
    Ok(names)
}

fn canonical_name(graph: &CountryGraph, country: CountryId) -> String {
    graph.country_name(country).unwrap_or_default().to_string()
}
