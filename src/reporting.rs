//! Console formatting for graph query results.
//!
//! Every function here returns plain text; colouring is applied by the CLI
//! handlers when printing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::error::{GraphError, Result};
use crate::graph::{PathResult, WordGraph};

/// `word -> next(weight), ...` for every node, in first-seen order.
#[must_use]
pub fn format_adjacency(graph: &WordGraph) -> String {
    let mut out = String::new();
    for node in graph.all_nodes() {
        if node.is_dangling() {
            let _ = writeln!(out, "{} -> (no outgoing edges)", node.name());
            continue;
        }
        let targets: Vec<String> = node
            .edges()
            .iter()
            .map(|e| format!("{}({})", graph.resolve(e.target()).name(), e.weight()))
            .collect();
        let _ = writeln!(out, "{} -> {}", node.name(), targets.join(", "));
    }
    out
}

/// Sentence describing a bridge-word query outcome.
///
/// # Errors
/// Passes through errors other than a missing word, which is reported as
/// a sentence.
pub fn format_bridge_words(
    word1: &str,
    word2: &str,
    result: Result<BTreeSet<String>>,
) -> Result<String> {
    let (word1, word2) = (word1.to_lowercase(), word2.to_lowercase());
    let bridges = match result {
        Ok(bridges) => bridges,
        Err(e @ GraphError::WordNotFound { .. }) => return Ok(e.to_string()),
        Err(e) => return Err(e),
    };

    let mut words: Vec<String> = bridges.into_iter().collect();
    Ok(match words.pop() {
        None => format!("No bridge words from {word1} to {word2}!"),
        Some(only) if words.is_empty() => {
            format!("The bridge word from {word1} to {word2} is: {only}")
        }
        Some(last) => format!(
            "The bridge words from {word1} to {word2} are: {} and {last}",
            words.join(", ")
        ),
    })
}

/// `a -> b -> c`, or `unreachable`.
#[must_use]
pub fn format_path(result: &PathResult) -> String {
    if result.is_reachable() {
        result.path().join(" -> ")
    } else {
        "unreachable".to_string()
    }
}

/// All paths from one source, nearest first, unreachable ones last.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn format_paths_from(source: &str, paths: &BTreeMap<String, PathResult>) -> String {
    let mut sorted: Vec<_> = paths.iter().collect();
    sorted.sort_by_key(|(_, result)| result.distance());

    let mut out = String::new();
    for (target, result) in sorted {
        if result.is_reachable() {
            let _ = writeln!(
                out,
                "{source} -> {target}: {} (length {})",
                format_path(result),
                result.distance()
            );
        } else {
            let _ = writeln!(out, "{source} -> {target}: unreachable");
        }
    }
    out
}

/// One `word: score` line per entry, four decimals.
#[must_use]
pub fn format_ranks(ranked: &[(String, f64)]) -> String {
    let mut out = String::new();
    for (word, score) in ranked {
        let _ = writeln!(out, "{word}: {score:.4}");
    }
    out
}
