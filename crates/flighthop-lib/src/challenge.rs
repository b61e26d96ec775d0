//! Random pair selection for the navigation game.
//!
//! A challenge asks the player to fly from a random source country to a
//! random destination country. Pairs qualify when their shortest route is at
//! least a minimum number of flights, so trivially adjacent countries can be
//! excluded. Selection recomputes reachability from scratch on every call;
//! the graph is small enough that an all-pairs sweep stays cheap, and nothing
//! has to be invalidated when a new dataset is loaded.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{CountryGraph, CountryId};
use crate::path::{shortest_path, shortest_path_lengths_from};

/// Ordered country pair whose shortest route meets a distance constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifyingPair {
    pub source: CountryId,
    pub destination: CountryId,
    pub length: usize,
}

/// A picked source/destination pair together with its optimal route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub source: CountryId,
    pub destination: CountryId,
    pub par_path: Vec<CountryId>,
}

impl Challenge {
    /// Optimal number of flights for the pair.
    pub fn par(&self) -> usize {
        self.par_path.len().saturating_sub(1)
    }
}

/// Enumerate every ordered pair whose shortest route is at least `min_length`
/// flights, in (source, destination) identifier order.
///
/// Runs one breadth-first search per source country.
pub fn qualifying_pairs(graph: &CountryGraph, min_length: usize) -> Vec<QualifyingPair> {
    let mut pairs = Vec::new();
    for source in 0..graph.country_count() {
        let distances = shortest_path_lengths_from(graph, source);
        for (destination, distance) in distances.into_iter().enumerate() {
            let Some(length) = distance else {
                continue;
            };
            if destination != source && length >= min_length {
                pairs.push(QualifyingPair {
                    source,
                    destination,
                    length,
                });
            }
        }
    }
    pairs
}

/// Pick a random qualifying pair and its optimal route.
///
/// Every qualifying pair is equally likely. Returns `None` when no ordered
/// pair is at least `min_length` flights apart.
pub fn pick_challenge<R: Rng + ?Sized>(
    graph: &CountryGraph,
    min_length: usize,
    rng: &mut R,
) -> Option<Challenge> {
    let pairs = qualifying_pairs(graph, min_length);
    let pair = pairs.choose(rng)?;
    let par_path = shortest_path(graph, pair.source, pair.destination)?;

    Some(Challenge {
        source: pair.source,
        destination: pair.destination,
        par_path,
    })
}

/// Sample up to `count` random pairs whose shortest length lies in
/// `[min_length, max_length]`, sorted by length for display.
pub fn sample_pairs_in_range<R: Rng + ?Sized>(
    graph: &CountryGraph,
    min_length: usize,
    max_length: usize,
    count: usize,
    rng: &mut R,
) -> Vec<QualifyingPair> {
    let mut pairs = qualifying_pairs(graph, min_length);
    pairs.retain(|pair| pair.length <= max_length);

    let mut sampled: Vec<QualifyingPair> = pairs.choose_multiple(rng, count).copied().collect();
    sampled.sort_by_key(|pair| (pair.length, pair.source, pair.destination));
    sampled
}
