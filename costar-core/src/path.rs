use crate::graph::ActorGraph;
use std::collections::{HashSet, VecDeque};

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest co-star distance in hops.
    Found(usize),
    /// Both actors were crawled but no chain of shared works connects them.
    NoPath,
    /// At least one actor was never crawled into the graph.
    NotFound,
}

/// Breadth-first search for the shortest co-star distance between two
/// actors.
///
/// Expects crawling to have completed; the graph must not be mutated
/// concurrently with the search. Neighbor sets are read as snapshots, so
/// iteration is never invalidated mid-expansion.
pub fn shortest_distance(graph: &ActorGraph, from: &str, to: &str) -> SearchOutcome {
    if !graph.contains(from) || !graph.contains(to) {
        return SearchOutcome::NotFound;
    }

    let mut frontier = VecDeque::new();
    let mut visited = HashSet::new();
    frontier.push_back((from.to_string(), 0usize));
    visited.insert(from.to_string());

    while let Some((current, distance)) = frontier.pop_front() {
        if current == to {
            return SearchOutcome::Found(distance);
        }

        if let Some(neighbors) = graph.neighbors(&current) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    frontier.push_back((neighbor, distance + 1));
                }
            }
        }
    }

    SearchOutcome::NoPath
}
