// src/graph/rank/pagerank.rs
//! `PageRank` by power iteration, with a uniform or TF-IDF restart vector.

use std::collections::HashMap;

use rayon::prelude::*;

use super::tfidf;
use crate::graph::model::{NodeId, WordGraph};

/// Added to every TF-IDF prior so no node starts with zero mass.
pub const PRIOR_FLOOR: f64 = 0.0001;

/// Classic `PageRank` with uniform restart.
///
/// Runs exactly `iterations` rounds; mass held by dangling nodes is spread
/// evenly over all nodes each round.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(graph: &WordGraph, damping: f64, iterations: usize) -> HashMap<String, f64> {
    if graph.is_empty() {
        return HashMap::new();
    }

    let n = graph.node_count() as f64;
    let mut ranks = vec![1.0 / n; graph.node_count()];
    let restart = vec![(1.0 - damping) / n; graph.node_count()];

    for _ in 0..iterations {
        ranks = iterate_once(graph, &ranks, &restart, damping);
    }

    label(graph, ranks)
}

/// `PageRank` whose starting distribution and restart term follow the TF-IDF
/// scores of `reference_text`. The vector is renormalized after every round.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weighted_pagerank(
    graph: &WordGraph,
    damping: f64,
    iterations: usize,
    reference_text: &str,
) -> HashMap<String, f64> {
    if graph.is_empty() {
        return HashMap::new();
    }

    let scores = tfidf::scores(reference_text);
    let n = graph.node_count() as f64;

    let mut ranks: Vec<f64> = graph
        .all_nodes()
        .iter()
        .map(|node| scores.get(node.name()).copied().unwrap_or(0.0) + PRIOR_FLOOR)
        .collect();
    normalize(&mut ranks);

    let restart: Vec<f64> = graph
        .all_nodes()
        .iter()
        .map(|node| (1.0 - damping) * scores.get(node.name()).copied().unwrap_or(1.0 / n))
        .collect();

    for _ in 0..iterations {
        ranks = iterate_once(graph, &ranks, &restart, damping);
        normalize(&mut ranks);
    }

    label(graph, ranks)
}

/// One Jacobi step: reads only `ranks`, returns a fresh vector.
#[allow(clippy::cast_precision_loss)]
fn iterate_once(graph: &WordGraph, ranks: &[f64], restart: &[f64], damping: f64) -> Vec<f64> {
    let n = ranks.len() as f64;
    let dangling_share = dangling_sum(graph, ranks) / n;

    restart
        .par_iter()
        .enumerate()
        .map(|(i, base)| {
            let incoming = compute_incoming_rank(graph, NodeId(i), ranks);
            base + damping * (incoming + dangling_share)
        })
        .collect()
}

fn dangling_sum(graph: &WordGraph, ranks: &[f64]) -> f64 {
    graph
        .iter()
        .filter(|(_, node)| node.is_dangling())
        .filter_map(|(id, _)| ranks.get(id.0))
        .sum()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank(graph: &WordGraph, target: NodeId, ranks: &[f64]) -> f64 {
    graph
        .predecessor_ids(target)
        .iter()
        .map(|&source| {
            let out = graph.resolve(source).out_degree() as f64;
            ranks.get(source.0).copied().unwrap_or(0.0) / out
        })
        .sum()
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}

fn label(graph: &WordGraph, ranks: Vec<f64>) -> HashMap<String, f64> {
    graph
        .all_nodes()
        .iter()
        .map(|node| node.name().to_string())
        .zip(ranks)
        .collect()
}
