//! Summary statistics over a built flight network.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::CountryGraph;
use crate::path::shortest_path_lengths_from;

/// Shortest-length bucket in the reachable-pair distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBucket {
    pub length: usize,
    pub pairs: usize,
}

/// Country ranked by its number of connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub country: String,
    pub connections: usize,
}

/// Summary statistics for a flight network.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStats {
    pub countries: usize,
    pub connections: usize,
    pub reachable_pairs: usize,
    pub length_distribution: Vec<LengthBucket>,
    pub top_sources: Vec<DegreeEntry>,
    pub top_destinations: Vec<DegreeEntry>,
}

/// Compute summary statistics for a network.
///
/// The length distribution covers every reachable ordered pair of distinct
/// countries (one breadth-first search per source). Degree tables list the
/// `top` most connected countries by outgoing and incoming flights; ties are
/// broken by name so the ordering is stable.
pub fn network_stats(graph: &CountryGraph, top: usize) -> NetworkStats {
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    let mut reachable_pairs = 0usize;

    for source in 0..graph.country_count() {
        let distances = shortest_path_lengths_from(graph, source);
        for (destination, distance) in distances.into_iter().enumerate() {
            let Some(length) = distance else {
                continue;
            };
            if destination == source {
                continue;
            }
            *histogram.entry(length).or_default() += 1;
            reachable_pairs += 1;
        }
    }

    let mut out_degree = vec![0usize; graph.country_count()];
    let mut in_degree = vec![0usize; graph.country_count()];
    for source in 0..graph.country_count() {
        out_degree[source] = graph.neighbours(source).len();
        for &destination in graph.neighbours(source) {
            in_degree[destination] += 1;
        }
    }

    NetworkStats {
        countries: graph.country_count(),
        connections: graph.edge_count(),
        reachable_pairs,
        length_distribution: histogram
            .into_iter()
            .map(|(length, pairs)| LengthBucket { length, pairs })
            .collect(),
        top_sources: top_degrees(graph, &out_degree, top),
        top_destinations: top_degrees(graph, &in_degree, top),
    }
}

fn top_degrees(graph: &CountryGraph, degrees: &[usize], top: usize) -> Vec<DegreeEntry> {
    let mut entries = Vec::new();
    for (id, &count) in degrees.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if let Some(name) = graph.country_name(id) {
            entries.push(DegreeEntry {
                country: name.to_string(),
                connections: count,
            });
        }
    }

    entries.sort_by(|a, b| {
        b.connections
            .cmp(&a.connections)
            .then_with(|| a.country.cmp(&b.country))
    });
    entries.truncate(top);
    entries
}
