//! Command dispatch: load config and text, build the graph, run one command.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::args::{Cli, Commands};
use super::handlers::{
    handle_bridge, handle_export, handle_generate, handle_path, handle_rank, handle_show,
    handle_walk, RankArgs,
};
use crate::config::Config;
use crate::exit::WordGraphExit;
use crate::graph::WordGraph;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if the config or text cannot be loaded, the text holds no
/// words, or the command handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.seed.is_some() {
        config.walk.seed = cli.seed;
    }

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let graph = WordGraph::from_text(&text)
        .with_context(|| format!("Cannot build a graph from {}", cli.file.display()))?;

    if cli.verbose {
        eprintln!(
            "{} {} words, {} edges (damping {}, {} iterations, seed {:?})",
            "[graph]".cyan(),
            graph.node_count(),
            graph.edge_count(),
            config.rank.damping,
            config.rank.iterations,
            config.walk.seed
        );
    }

    run(&graph, &config, cli.command)
}

fn run(graph: &WordGraph, config: &Config, command: Commands) -> Result<WordGraphExit> {
    let mut rng = make_rng(config.walk.seed);
    match command {
        Commands::Show => handle_show(graph),
        Commands::Bridge { word1, word2 } => handle_bridge(graph, &word1, &word2),
        Commands::Generate { text } => handle_generate(graph, &text.join(" "), &mut rng),
        Commands::Path { from, to, json } => handle_path(graph, &from, to.as_deref(), json),
        Commands::Rank {
            word,
            weighted,
            damping,
            iterations,
            json,
        } => handle_rank(
            graph,
            &RankArgs {
                word,
                reference: weighted,
                damping: damping.unwrap_or(config.rank.damping),
                iterations: iterations.unwrap_or(config.rank.iterations),
                json,
            },
        ),
        Commands::Walk { output } => handle_walk(graph, &mut rng, output.as_deref()),
        Commands::Export {
            output,
            format,
            dot_only,
        } => handle_export(
            graph,
            &output,
            format.unwrap_or(config.export.format),
            dot_only,
            config.export.keep_dot,
        ),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
