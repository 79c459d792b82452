// tests/unit_dot.rs
//! Tests for DOT rendering.

use wordgraph_core::graph::{to_dot, WordGraph};

#[test]
fn test_dot_layout() {
    let graph = WordGraph::from_text("a b a b").unwrap();
    let dot = to_dot(&graph);
    let expected = "digraph G {\n  rankdir=LR;\n  node [shape=circle];\n  \"a\";\n  \"b\";\n  \
                    \"a\" -> \"b\" [label=\"2\"];\n  \"b\" -> \"a\" [label=\"1\"];\n}\n";
    assert_eq!(dot, expected);
}

#[test]
fn test_dot_lists_isolated_node() {
    let graph = WordGraph::from_text("lonely").unwrap();
    let dot = to_dot(&graph);
    assert!(dot.contains("  \"lonely\";\n"));
    assert!(!dot.contains("->"));
}
