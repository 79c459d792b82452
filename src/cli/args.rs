use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ImageFormat;

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Word adjacency graph explorer")]
pub struct Cli {
    /// Text file the graph is built from
    #[arg(long, short, value_name = "FILE")]
    pub file: PathBuf,
    /// Config file (defaults to ./wordgraph.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Seed for random walks and bridge-word picks
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print graph statistics and settings to stderr
    #[arg(long, short)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every word with its successors and edge weights
    Show,
    /// Query the bridge words between two words
    Bridge { word1: String, word2: String },
    /// Insert bridge words into a new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Shortest path between two words, or from one word to all others
    Path {
        from: String,
        to: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// PageRank of every word, or of a single word
    Rank {
        word: Option<String>,
        /// Weight the ranking with TF-IDF scores of this reference text
        #[arg(long, value_name = "REFERENCE_FILE")]
        weighted: Option<PathBuf>,
        #[arg(long)]
        damping: Option<f64>,
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Random walk until a dead end or a repeated edge
    Walk {
        /// Save the walk, space separated, to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write the graph as DOT and render it with Graphviz
    Export {
        /// Output path without extension
        output: PathBuf,
        #[arg(long, value_enum)]
        format: Option<ImageFormat>,
        /// Only write the .dot file
        #[arg(long)]
        dot_only: bool,
    },
}
