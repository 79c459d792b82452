// src/graph/dot.rs
//! Graphviz DOT rendering of a word graph.

use std::fmt::Write;

use super::model::WordGraph;

/// Renders the graph as `digraph G { ... }`: one line per node, then one
/// line per edge labelled with its weight.
#[must_use]
pub fn to_dot(graph: &WordGraph) -> String {
    let mut dot = String::from("digraph G {\n  rankdir=LR;\n  node [shape=circle];\n");

    for node in graph.all_nodes() {
        let _ = writeln!(dot, "  \"{}\";", node.name());
    }

    for node in graph.all_nodes() {
        for edge in node.edges() {
            let _ = writeln!(
                dot,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                node.name(),
                graph.resolve(edge.target()).name(),
                edge.weight()
            );
        }
    }

    dot.push_str("}\n");
    dot
}
