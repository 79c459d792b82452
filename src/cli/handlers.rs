// src/cli/handlers.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rand::Rng;

use crate::config::ImageFormat;
use crate::exit::WordGraphExit;
use crate::graph::{self, WordGraph};
use crate::reporting;
use crate::synth::synthesize_text;

pub struct RankArgs {
    pub word: Option<String>,
    pub reference: Option<PathBuf>,
    pub damping: f64,
    pub iterations: usize,
    pub json: bool,
}

/// Handles the show command.
///
/// # Errors
/// Infallible; returns `Result` for dispatch uniformity.
pub fn handle_show(graph: &WordGraph) -> Result<WordGraphExit> {
    println!("{}", "Directed graph:".bold());
    print!("{}", reporting::format_adjacency(graph));
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
///
/// # Errors
/// Returns error on failures other than a missing word.
pub fn handle_bridge(graph: &WordGraph, word1: &str, word2: &str) -> Result<WordGraphExit> {
    let result = graph::bridge_words(graph, word1, word2);
    let missing = matches!(&result, Err(e) if e.missing_word().is_some());
    let message = reporting::format_bridge_words(word1, word2, result)?;

    if missing {
        println!("{}", message.yellow());
        return Ok(WordGraphExit::NotFound);
    }
    println!("{message}");
    Ok(WordGraphExit::Success)
}

/// Handles the generate command.
///
/// # Errors
/// Infallible; returns `Result` for dispatch uniformity.
pub fn handle_generate<R: Rng>(
    graph: &WordGraph,
    text: &str,
    rng: &mut R,
) -> Result<WordGraphExit> {
    println!("{}", synthesize_text(graph, text, rng));
    Ok(WordGraphExit::Success)
}

/// Handles the path command.
///
/// # Errors
/// Returns error if a word is missing or JSON serialization fails.
pub fn handle_path(
    graph: &WordGraph,
    from: &str,
    to: Option<&str>,
    json: bool,
) -> Result<WordGraphExit> {
    let Some(to) = to else {
        let paths = graph::shortest_paths_from(graph, from)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&paths)?);
        } else {
            print!("{}", reporting::format_paths_from(&from.to_lowercase(), &paths));
        }
        return Ok(WordGraphExit::Success);
    };

    let result = graph::shortest_path(graph, from, to)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_reachable() {
        println!("{} {}", "Shortest path:".bold(), reporting::format_path(&result));
        println!("{} {}", "Length:".bold(), result.distance());
    } else {
        println!("{}", format!("No path from {from} to {to}").yellow());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the damping factor is out of range or the reference
/// text cannot be read.
pub fn handle_rank(graph: &WordGraph, args: &RankArgs) -> Result<WordGraphExit> {
    if !(args.damping > 0.0 && args.damping < 1.0) {
        bail!("damping must be between 0 and 1 (exclusive), got {}", args.damping);
    }

    let ranks = match &args.reference {
        Some(path) => {
            let reference = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            graph::weighted_pagerank(graph, args.damping, args.iterations, &reference)
        }
        None => graph::pagerank(graph, args.damping, args.iterations),
    };

    if let Some(word) = &args.word {
        let key = word.to_lowercase();
        let Some(score) = ranks.get(&key) else {
            println!("{}", format!("No {key} in the graph!").yellow());
            return Ok(WordGraphExit::NotFound);
        };
        if args.json {
            println!("{}", serde_json::json!({ "word": key, "rank": score }));
        } else {
            println!("{key}: {score:.4}");
        }
        return Ok(WordGraphExit::Success);
    }

    let ranked = graph::ranked(&ranks);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print!("{}", reporting::format_ranks(&ranked));
    }
    Ok(WordGraphExit::Success)
}

/// Handles the walk command.
///
/// # Errors
/// Returns error if the walk cannot be saved.
pub fn handle_walk<R: Rng>(
    graph: &WordGraph,
    rng: &mut R,
    output: Option<&Path>,
) -> Result<WordGraphExit> {
    let walk = graph::random_walk(graph, rng);
    println!("{} {}", "Random walk:".bold(), walk.join(" -> "));

    if let Some(path) = output {
        fs::write(path, format!("{}\n", walk.join(" ")))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{} {}", "Saved to".green(), path.display());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the export command.
///
/// # Errors
/// Returns error if the DOT file cannot be written.
pub fn handle_export(
    graph: &WordGraph,
    stem: &Path,
    format: ImageFormat,
    dot_only: bool,
    keep_dot: bool,
) -> Result<WordGraphExit> {
    let dot_path = stem.with_extension("dot");
    fs::write(&dot_path, graph::to_dot(graph))
        .with_context(|| format!("Failed to write {}", dot_path.display()))?;

    if dot_only {
        println!("{} {}", "Wrote".green(), dot_path.display());
        return Ok(WordGraphExit::Success);
    }

    let image_path = stem.with_extension(format.extension());
    let exit = render(&dot_path, &image_path, format);
    if !keep_dot {
        let _ = fs::remove_file(&dot_path);
    }
    Ok(exit)
}

fn render(dot_path: &Path, image_path: &Path, format: ImageFormat) -> WordGraphExit {
    let status = Command::new("dot")
        .arg(format!("-T{}", format.extension()))
        .arg(dot_path)
        .arg("-o")
        .arg(image_path)
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("{} {}", "Graph saved to".green(), image_path.display());
            WordGraphExit::Success
        }
        Ok(s) => {
            eprintln!("{} Graphviz exited with {s}", "Error:".red());
            WordGraphExit::RenderFailed
        }
        Err(e) => {
            eprintln!(
                "{} could not run Graphviz `dot` ({e}); is it installed?",
                "Error:".red()
            );
            WordGraphExit::RenderFailed
        }
    }
}
