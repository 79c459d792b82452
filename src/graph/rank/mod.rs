// src/graph/rank/mod.rs
pub mod pagerank;
pub mod tfidf;

pub use pagerank::{pagerank, weighted_pagerank};

use std::collections::HashMap;

/// Scores sorted from highest to lowest; ties broken by word.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn ranked(ranks: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut ranked: Vec<_> = ranks.iter().map(|(w, r)| (w.clone(), *r)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}
