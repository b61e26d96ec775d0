use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dataset::{AirportRecord, RouteRecord};

/// Similarity floor for fuzzy country suggestions.
const MIN_SIMILARITY: f64 = 0.85;

/// Dense identifier for a country node, assigned in first-retained-edge order.
pub type CountryId = usize;

/// Directed country-level flight network.
///
/// Nodes are countries that participate in at least one international route.
/// Adjacency lists are sorted by identifier, so traversal order is stable for
/// a given input file. The graph is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CountryGraph {
    names: Vec<String>,
    ids: HashMap<String, CountryId>,
    neighbours: Vec<Vec<CountryId>>,
    edges: HashSet<(CountryId, CountryId)>,
}

impl CountryGraph {
    /// Number of countries in the network.
    pub fn country_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed connections in the network.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` when the network has no countries at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a country identifier by its exact, case-sensitive name.
    pub fn country_id(&self, name: &str) -> Option<CountryId> {
        self.ids.get(name).copied()
    }

    /// Resolve an identifier back to the canonical country name.
    pub fn country_name(&self, country: CountryId) -> Option<&str> {
        self.names.get(country).map(String::as_str)
    }

    /// Iterate over canonical country names in identifier order.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Return the direct destinations reachable from a country.
    pub fn neighbours(&self, country: CountryId) -> &[CountryId] {
        self.neighbours
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Test whether a single flight from `from` to `to` exists.
    pub fn is_valid_move(&self, from: CountryId, to: CountryId) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Return up to `limit` country names similar to `name`, best match first.
    pub fn fuzzy_country_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    fn intern(&mut self, name: &str) -> CountryId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.neighbours.push(Vec::new());
        id
    }
}

/// Fold flight records into a directed country graph.
///
/// Airport codes are mapped to countries first; when the same IATA code
/// appears more than once, the last occurrence wins. Routes referencing a
/// code with no mapping and routes that stay inside one country are skipped
/// without error. Countries are interned only when an edge involving them is
/// retained, so the node set is exactly the countries with at least one
/// connection.
pub fn build_graph(routes: &[RouteRecord], airports: &[AirportRecord]) -> CountryGraph {
    let mut airport_country: HashMap<&str, &str> = HashMap::new();
    for airport in airports {
        airport_country.insert(airport.iata.as_str(), airport.country.as_str());
    }

    let mut graph = CountryGraph::default();
    let mut skipped_unmapped = 0usize;
    let mut skipped_domestic = 0usize;

    for route in routes {
        let (Some(&source), Some(&destination)) = (
            airport_country.get(route.source.as_str()),
            airport_country.get(route.destination.as_str()),
        ) else {
            skipped_unmapped += 1;
            continue;
        };
        if source == destination {
            skipped_domestic += 1;
            continue;
        }

        let from = graph.intern(source);
        let to = graph.intern(destination);
        if graph.edges.insert((from, to)) {
            graph.neighbours[from].push(to);
        }
    }

    for neighbours in graph.neighbours.iter_mut() {
        neighbours.sort_unstable();
    }

    debug!(
        countries = graph.country_count(),
        edges = graph.edge_count(),
        skipped_unmapped,
        skipped_domestic,
        "built country route graph",
    );

    graph
}
