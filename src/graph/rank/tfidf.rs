// src/graph/rank/tfidf.rs
//! TF-IDF over a single reference text.
//!
//! "Document frequency" here is the raw occurrence count of a token inside
//! that one text, so `idf(t) = ln(total_tokens / count(t))`.

use std::collections::HashMap;

use crate::tokens::Tokenizer;

/// Inverse frequency of every token in `text`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn inverse_frequencies(text: &str) -> HashMap<String, f64> {
    let counts = Tokenizer::term_frequencies(text);
    let total: usize = counts.values().sum();

    counts
        .into_iter()
        .map(|(token, count)| (token, (total as f64 / count as f64).ln()))
        .collect()
}

/// `tf * idf` for every token, scaled so the highest score is 1.
///
/// A text whose best score is zero (a single distinct word) is left unscaled.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scores(text: &str) -> HashMap<String, f64> {
    let counts = Tokenizer::term_frequencies(text);
    let idf = inverse_frequencies(text);

    let mut scores: HashMap<String, f64> = counts
        .into_iter()
        .map(|(token, count)| {
            let weight = idf.get(&token).copied().unwrap_or(0.0);
            (token, count as f64 * weight)
        })
        .collect();

    let max = scores.values().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        for score in scores.values_mut() {
            *score /= max;
        }
    }
    scores
}
