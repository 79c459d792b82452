// tests/unit_rank.rs
//! Tests for uniform and TF-IDF-weighted PageRank.

use wordgraph_core::graph::rank::tfidf;
use wordgraph_core::graph::{pagerank, ranked, weighted_pagerank, WordGraph};

const STORY: &str = "The scientist carefully analyzed the data, wrote a detailed report, \
                     and shared the report with the team, but the team requested more data, \
                     so the scientist analyzed it again.";

fn assert_distribution(ranks: &std::collections::HashMap<String, f64>, label: &str) {
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-9, "{label}: sum was {total}");
    assert!(ranks.values().all(|r| *r > 0.0), "{label}: non-positive rank");
}

#[test]
fn test_pagerank_is_distribution_for_any_iteration_count() {
    let graph = WordGraph::from_text(STORY).unwrap();
    for iterations in [0, 1, 2, 5, 20, 100] {
        let ranks = pagerank(&graph, 0.85, iterations);
        assert_eq!(ranks.len(), graph.node_count());
        assert_distribution(&ranks, &format!("{iterations} iterations"));
    }
}

#[test]
fn test_hub_word_ranks_first() {
    let graph = WordGraph::from_text(STORY).unwrap();
    let ranks = pagerank(&graph, 0.85, 50);
    let top = ranked(&ranks);
    assert_eq!(top.first().map(|(w, _)| w.as_str()), Some("the"));
}

#[test]
fn test_pagerank_exact_small_graph() {
    // a -> b, b dangling. One iteration from (0.5, 0.5) with d = 0.5:
    // a = 0.25 + 0.5 * (0 + 0.25)       = 0.375
    // b = 0.25 + 0.5 * (0.5 + 0.25)     = 0.625
    let graph = WordGraph::from_text("a b").unwrap();
    let ranks = pagerank(&graph, 0.5, 1);
    assert!((ranks["a"] - 0.375).abs() < 1e-12);
    assert!((ranks["b"] - 0.625).abs() < 1e-12);
}

#[test]
fn test_weighted_pagerank_is_distribution() {
    let graph = WordGraph::from_text(STORY).unwrap();
    for iterations in [0, 1, 10, 50] {
        let ranks = weighted_pagerank(&graph, 0.85, iterations, STORY);
        assert_eq!(ranks.len(), graph.node_count());
        assert_distribution(&ranks, &format!("weighted {iterations} iterations"));
    }
}

#[test]
fn test_weighted_initial_distribution_follows_tfidf() {
    let graph = WordGraph::from_text("alpha beta gamma").unwrap();
    // Reference text mentions only beta; alpha and gamma sit on the floor.
    let ranks = weighted_pagerank(&graph, 0.85, 0, "beta beta delta");
    assert!(ranks["beta"] > 0.9);
    assert!((ranks["alpha"] - ranks["gamma"]).abs() < 1e-12);
}

#[test]
fn test_weighted_restart_for_word_missing_from_reference() {
    // a -> b -> c, c dangling. Reference "a b" scores a = b = 1 and omits c.
    // Start: (1 + floor, 1 + floor, floor) normalized.
    // Restart at d = 0.5: a = b = 0.5 * 1, c = 0.5 / 3.
    let graph = WordGraph::from_text("a b c").unwrap();
    let ranks = weighted_pagerank(&graph, 0.5, 1, "a b");

    let start_total = 2.0 * 1.0001 + 0.0001;
    let (a0, b0, c0) = (1.0001 / start_total, 1.0001 / start_total, 0.0001 / start_total);
    let share = c0 / 3.0;
    let a = 0.5 + 0.5 * share;
    let b = 0.5 + 0.5 * (a0 + share);
    let c = 0.5 / 3.0 + 0.5 * (b0 + share);
    let total = a + b + c;

    assert!((ranks["a"] - a / total).abs() < 1e-12);
    assert!((ranks["b"] - b / total).abs() < 1e-12);
    assert!((ranks["c"] - c / total).abs() < 1e-12);
    assert!((ranks["c"] - 0.25).abs() < 1e-4);
}

#[test]
fn test_weighted_single_word_reference_is_unscaled() {
    // "beta beta" has idf ln(1) = 0, so beta scores 0 and stays unscaled.
    // Start is uniform (floor only). Restart at d = 0.8: alpha = 0.2 / 2, beta = 0.
    // alpha = 0.1 + 0.8 * 0.25 = 0.3, beta = 0.8 * (0.5 + 0.25) = 0.6, then /0.9.
    assert_eq!(tfidf::scores("beta beta")["beta"], 0.0);

    let graph = WordGraph::from_text("alpha beta").unwrap();
    let ranks = weighted_pagerank(&graph, 0.8, 1, "beta beta");
    assert!((ranks["alpha"] - 1.0 / 3.0).abs() < 1e-12);
    assert!((ranks["beta"] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_weighted_prior_shifts_mass() {
    let graph = WordGraph::from_text(STORY).unwrap();
    let plain = pagerank(&graph, 0.85, 50);
    let weighted = weighted_pagerank(&graph, 0.85, 50, "report report report data");
    assert!(weighted["report"] > plain["report"]);
}

#[test]
fn test_tfidf_scores_bounded() {
    let scores = tfidf::scores(STORY);
    assert!(scores.values().all(|s| (0.0..=1.0).contains(s)));
    assert!(scores.values().any(|s| (*s - 1.0).abs() < 1e-12));
}

#[test]
fn test_ranked_order_is_descending_then_alphabetical() {
    let graph = WordGraph::from_text("a b c a").unwrap();
    let ranks = pagerank(&graph, 0.85, 10);
    let order: Vec<String> = ranked(&ranks).into_iter().map(|(w, _)| w).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}
