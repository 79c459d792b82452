// src/synth.rs
//! New text from old: a bridge word is spliced between each pair of words.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::graph::bridge::bridge_words;
use crate::graph::WordGraph;
use crate::tokens::Tokenizer;

/// Rewrites `input` by inserting one randomly chosen bridge word between
/// every consecutive pair of its words that has any.
///
/// Pairs without bridge words, or with a word missing from the graph, are
/// kept as they are. Leading capitals of the input words are restored
/// only when no word was inserted (the word counts must match exactly).
/// Input without any words is returned unchanged.
pub fn synthesize_text<R: Rng>(graph: &WordGraph, input: &str, rng: &mut R) -> String {
    let tokens = Tokenizer::tokenize(input);
    let Some(first) = tokens.first() else {
        return input.to_string();
    };

    let mut output = vec![first.clone()];
    for pair in tokens.windows(2) {
        let [current, next] = pair else { continue };
        if let Ok(bridges) = bridge_words(graph, current, next) {
            let candidates: Vec<&String> = bridges.iter().collect();
            if let Some(bridge) = candidates.choose(rng) {
                output.push((*bridge).clone());
            }
        }
        output.push(next.clone());
    }

    restore_capitals(&mut output, &Tokenizer::capitalization(input));
    output.join(" ")
}

fn restore_capitals(words: &mut [String], capitals: &[bool]) {
    if words.len() != capitals.len() {
        return;
    }
    for (word, &upper) in words.iter_mut().zip(capitals) {
        if upper {
            *word = capitalize(word);
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
