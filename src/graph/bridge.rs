// src/graph/bridge.rs
//! Bridge words: every `c` with edges `a -> c` and `c -> b`.

use std::collections::BTreeSet;

use super::model::WordGraph;
use crate::error::{GraphError, Result};

/// Returns the bridge words from `word1` to `word2`.
///
/// An empty set means both words exist but nothing links them.
///
/// # Errors
/// Returns [`GraphError::WordNotFound`] for the first of the two words
/// (checked left to right) that is not in the graph.
pub fn bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> Result<BTreeSet<String>> {
    let Some(first) = graph.node(word1) else {
        return Err(GraphError::not_found(word1));
    };
    let Some(second) = graph.id(word2) else {
        return Err(GraphError::not_found(word2));
    };

    let predecessors = graph.predecessor_ids(second);
    Ok(first
        .edges()
        .iter()
        .map(|e| e.target())
        .filter(|candidate| predecessors.contains(candidate))
        .map(|id| graph.resolve(id).name().to_string())
        .collect())
}
