use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};
use crate::graph::{CountryGraph, CountryId};

/// Outcome of an exact-length route search.
///
/// `Infeasible` means no walk of the requested length can exist (the goal is
/// unreachable, or closer than the request allows). `NotFound` means the
/// search exhausted every candidate without a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactPathStatus {
    Found(Vec<CountryId>),
    Infeasible,
    NotFound,
}

/// Find the shortest route between two countries using breadth-first search.
pub fn shortest_path(
    graph: &CountryGraph,
    start: CountryId,
    goal: CountryId,
) -> Option<Vec<CountryId>> {
    if start >= graph.country_count() || goal >= graph.country_count() {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: HashMap<CountryId, Option<CountryId>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbours(current) {
            if parents.contains_key(&next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Shortest distance in flights between two countries.
pub fn shortest_path_len(
    graph: &CountryGraph,
    start: CountryId,
    goal: CountryId,
) -> Option<usize> {
    shortest_path(graph, start, goal).map(|path| path.len() - 1)
}

/// Distances in flights from `start` to every country, indexed by identifier.
///
/// Unreachable countries stay `None`. One call per source is what all-pairs
/// consumers (pair picking, statistics) iterate over.
pub fn shortest_path_lengths_from(graph: &CountryGraph, start: CountryId) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.country_count()];
    if start >= graph.country_count() {
        return distances;
    }

    let mut queue = VecDeque::new();
    distances[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(distance) = distances[current] else {
            continue;
        };
        for &next in graph.neighbours(current) {
            if distances[next].is_none() {
                distances[next] = Some(distance + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

/// Search for a route of exactly `length` flights from `start` to `goal`.
///
/// The shortest route is screened first: when it already has the requested
/// length it is returned as-is, and when it is longer than the request (or
/// the goal is unreachable at all) the request is infeasible. Otherwise a
/// depth-first search explores walks under a hop budget. Intermediate
/// countries may repeat; the goal may only be entered on the final flight.
/// The first walk found in adjacency order wins.
pub fn find_exact_path(
    graph: &CountryGraph,
    start: CountryId,
    goal: CountryId,
    length: usize,
) -> Result<ExactPathStatus> {
    if start == goal {
        return Err(Error::InvalidPathRequest {
            message: "start and goal must be different countries".to_string(),
        });
    }
    if start >= graph.country_count() || goal >= graph.country_count() {
        return Err(Error::InvalidPathRequest {
            message: "start and goal must be countries in the network".to_string(),
        });
    }
    if length == 0 {
        return Err(Error::InvalidPathRequest {
            message: "target length must be at least one flight".to_string(),
        });
    }

    let Some(shortest) = shortest_path(graph, start, goal) else {
        return Ok(ExactPathStatus::Infeasible);
    };
    let shortest_len = shortest.len() - 1;
    if shortest_len == length {
        return Ok(ExactPathStatus::Found(shortest));
    }
    if shortest_len > length {
        return Ok(ExactPathStatus::Infeasible);
    }

    // Explicit frame stack; termination comes from the hop budget, not a
    // visited set. Only reached with a budget of at least two.
    let mut stack = vec![Frame {
        node: start,
        remaining: length,
        next: 0,
    }];
    let mut walk = vec![start];

    while let Some(top) = stack.len().checked_sub(1) {
        let Frame {
            node,
            remaining,
            next,
        } = stack[top];
        let neighbours = graph.neighbours(node);

        if next >= neighbours.len() {
            stack.pop();
            walk.pop();
            continue;
        }
        stack[top].next += 1;

        let candidate = neighbours[next];
        if candidate == goal {
            if remaining == 1 {
                walk.push(candidate);
                return Ok(ExactPathStatus::Found(walk));
            }
            // The goal may only be entered on the final flight.
            continue;
        }
        if remaining == 1 {
            continue;
        }

        walk.push(candidate);
        stack.push(Frame {
            node: candidate,
            remaining: remaining - 1,
            next: 0,
        });
    }

    Ok(ExactPathStatus::NotFound)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: CountryId,
    remaining: usize,
    next: usize,
}

fn reconstruct_path(
    parents: &HashMap<CountryId, Option<CountryId>>,
    start: CountryId,
    goal: CountryId,
) -> Vec<CountryId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}
