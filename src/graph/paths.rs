// src/graph/paths.rs
//! Shortest paths over edge weights (Dijkstra).
//!
//! Tentative distances and predecessor links live in a per-call [`Search`],
//! never on the graph, so every query starts from a clean slate.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use serde::Serialize;

use super::model::{NodeId, WordGraph};
use crate::error::{GraphError, Result};

/// Distance reported for a destination that cannot be reached.
pub const UNREACHABLE: u64 = u64::MAX;

/// Outcome of a path query between two words that both exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Reachable { path: Vec<String>, distance: u64 },
    Unreachable,
}

impl PathResult {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    /// Words from source to destination, inclusive. Empty when unreachable.
    #[must_use]
    pub fn path(&self) -> &[String] {
        match self {
            Self::Reachable { path, .. } => path,
            Self::Unreachable => &[],
        }
    }

    /// Total edge weight along the path, or [`UNREACHABLE`].
    #[must_use]
    pub fn distance(&self) -> u64 {
        match self {
            Self::Reachable { distance, .. } => *distance,
            Self::Unreachable => UNREACHABLE,
        }
    }
}

/// Shortest path from `source` to `destination`.
///
/// # Errors
/// Returns [`GraphError::WordNotFound`] if either word is missing; nothing is
/// computed in that case.
pub fn shortest_path(graph: &WordGraph, source: &str, destination: &str) -> Result<PathResult> {
    let from = graph.id(source).ok_or_else(|| GraphError::not_found(source))?;
    let to = graph
        .id(destination)
        .ok_or_else(|| GraphError::not_found(destination))?;

    Ok(Search::run(graph, from).path_to(graph, to))
}

/// Shortest paths from `source` to every other word, from a single search.
///
/// # Errors
/// Returns [`GraphError::WordNotFound`] if `source` is missing.
pub fn shortest_paths_from(
    graph: &WordGraph,
    source: &str,
) -> Result<BTreeMap<String, PathResult>> {
    let from = graph.id(source).ok_or_else(|| GraphError::not_found(source))?;
    let search = Search::run(graph, from);

    Ok(graph
        .iter()
        .filter(|(id, _)| *id != from)
        .map(|(id, node)| (node.name().to_string(), search.path_to(graph, id)))
        .collect())
}

struct Search {
    source: NodeId,
    distance: Vec<u64>,
    previous: Vec<Option<NodeId>>,
}

impl Search {
    #[allow(clippy::indexing_slicing)] // Guarded: every id comes from `graph`
    fn run(graph: &WordGraph, source: NodeId) -> Self {
        let n = graph.node_count();
        let mut search = Self {
            source,
            distance: vec![UNREACHABLE; n],
            previous: vec![None; n],
        };
        search.distance[source.0] = 0;

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0_u64, source)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            // Stale entry: a shorter route was already settled.
            if dist > search.distance[current.0] {
                continue;
            }
            for edge in graph.resolve(current).edges() {
                let next = edge.target();
                let candidate = dist.saturating_add(edge.weight());
                if candidate < search.distance[next.0] {
                    search.distance[next.0] = candidate;
                    search.previous[next.0] = Some(current);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        search
    }

    fn path_to(&self, graph: &WordGraph, destination: NodeId) -> PathResult {
        let mut ids = vec![destination];
        let mut current = destination;
        while current != self.source {
            match self.previous.get(current.0).copied().flatten() {
                Some(prev) => {
                    ids.push(prev);
                    current = prev;
                }
                None => return PathResult::Unreachable,
            }
        }
        ids.reverse();

        PathResult::Reachable {
            path: ids
                .into_iter()
                .map(|id| graph.resolve(id).name().to_string())
                .collect(),
            distance: self.distance.get(destination.0).copied().unwrap_or(UNREACHABLE),
        }
    }
}
