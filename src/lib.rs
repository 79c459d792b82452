//! Word adjacency graphs built from plain text.
//!
//! Text is tokenized into lowercase words and every pair of adjacent words
//! becomes a weighted edge. The graph then answers bridge-word, shortest
//! path, `PageRank` and random-walk queries.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;
pub mod synth;
pub mod tokens;

pub use error::{GraphError, Result};
pub use graph::{build_graph, PathResult, WordGraph};
pub use synth::synthesize_text;
pub use tokens::Tokenizer;
