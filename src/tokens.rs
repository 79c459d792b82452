// src/tokens.rs
//! Text normalization: raw text to lowercase alphabetic tokens.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// A maximal run of ASCII letters. Everything else separates words.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

const WORD_PATTERN: &str = r"[A-Za-z]+";

pub struct Tokenizer;

impl Tokenizer {
    /// Splits text into lowercase word tokens, dropping digits, punctuation
    /// and any non-ASCII characters.
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .collect()
    }

    /// Counts how many times each token occurs in the text.
    #[must_use]
    pub fn term_frequencies(text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for token in Self::tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }

    /// For every whitespace-separated word of the raw text, whether it starts
    /// with an uppercase character.
    ///
    /// Leading whitespace counts as one empty, lowercase word.
    #[must_use]
    pub fn capitalization(text: &str) -> Vec<bool> {
        let mut flags = Vec::new();
        if text.starts_with(char::is_whitespace) && !text.trim().is_empty() {
            flags.push(false);
        }
        flags.extend(
            text.split_whitespace()
                .map(|word| word.chars().next().is_some_and(char::is_uppercase)),
        );
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_collapse() {
        let tokens = Tokenizer::tokenize("Hello,   World!! 42 times\n\tagain");
        assert_eq!(tokens, vec!["hello", "world", "times", "again"]);
    }

    #[test]
    fn test_digits_split_words() {
        assert_eq!(Tokenizer::tokenize("abc1def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_non_ascii_is_separator() {
        assert_eq!(Tokenizer::tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_capitalization_flags() {
        assert_eq!(
            Tokenizer::capitalization("The quick Brown fox"),
            vec![true, false, true, false]
        );
        assert!(Tokenizer::capitalization("   ").is_empty());
        assert_eq!(Tokenizer::capitalization(" X B"), vec![false, true, true]);
    }
}
