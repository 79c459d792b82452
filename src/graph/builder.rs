// src/graph/builder.rs
//! Graph construction from a token sequence.

use super::model::{Orientation, WordGraph};
use crate::error::{GraphError, Result};
use crate::tokens::Tokenizer;

/// Builds the adjacency graph: one unit of weight per consecutive token pair.
///
/// # Errors
/// Returns [`GraphError::EmptyText`] if there are no tokens at all.
pub fn build_graph<S: AsRef<str>>(tokens: &[S]) -> Result<WordGraph> {
    let Some(first) = tokens.first() else {
        return Err(GraphError::EmptyText);
    };

    let mut graph = WordGraph::new(Orientation::Directed);
    graph.add_node(first.as_ref());
    for pair in tokens.windows(2) {
        if let [current, next] = pair {
            graph.add_edge(current.as_ref(), next.as_ref(), 1);
        }
    }
    Ok(graph)
}

impl WordGraph {
    /// Tokenizes `text` and builds its graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyText`] if the text holds no words.
    pub fn from_text(text: &str) -> Result<Self> {
        build_graph(&Tokenizer::tokenize(text))
    }
}
