// src/graph/walk.rs
//! Random walks that stop at a dead end or on the first repeated edge.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::model::{NodeId, WordGraph};

/// Walks the graph from a uniformly chosen start node.
///
/// Each step follows a uniformly chosen outgoing edge. The walk ends when the
/// current node has no outgoing edge, or when the chosen edge was already
/// traversed earlier in this walk (that edge is not taken again). An empty
/// graph yields an empty walk.
pub fn random_walk<R: Rng>(graph: &WordGraph, rng: &mut R) -> Vec<String> {
    if graph.is_empty() {
        return Vec::new();
    }

    let mut current = NodeId(rng.random_range(0..graph.node_count()));
    let mut walk = vec![graph.resolve(current).name().to_string()];
    let mut traversed: HashSet<(NodeId, NodeId)> = HashSet::new();

    while let Some(edge) = graph.resolve(current).edges().choose(rng) {
        let next = edge.target();
        if !traversed.insert((current, next)) {
            break;
        }
        current = next;
        walk.push(graph.resolve(current).name().to_string());
    }

    walk
}
