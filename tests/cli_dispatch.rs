// tests/cli_dispatch.rs
//! End-to-end command dispatch against temporary files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;
use wordgraph_core::cli::{dispatch, Cli};
use wordgraph_core::exit::WordGraphExit;

const TEXT: &str = "To explore strange new worlds, to seek out new life and new civilizations.";

struct Fixture {
    dir: TempDir,
    text: PathBuf,
    config: PathBuf,
}

impl Fixture {
    fn new(text: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let text_path = dir.path().join("input.txt");
        let config = dir.path().join("wordgraph.toml");
        fs::write(&text_path, text).unwrap();
        fs::write(&config, "[walk]\nseed = 11\n").unwrap();
        Self {
            dir,
            text: text_path,
            config,
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, command: &[&str]) -> anyhow::Result<WordGraphExit> {
        let mut argv = vec![
            "wordgraph".to_string(),
            "--file".to_string(),
            self.text.display().to_string(),
            "--config".to_string(),
            self.config.display().to_string(),
        ];
        argv.extend(command.iter().map(|s| (*s).to_string()));
        dispatch::execute(Cli::try_parse_from(argv).unwrap())
    }
}

fn arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_show_and_bridge() {
    let fx = Fixture::new(TEXT);
    assert_eq!(fx.run(&["show"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["bridge", "seek", "new"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["bridge", "seek", "klingon"]).unwrap(), WordGraphExit::NotFound);
}

#[test]
fn test_generate_path_and_rank() {
    let fx = Fixture::new(TEXT);
    assert_eq!(
        fx.run(&["generate", "Seek", "to", "explore", "new"]).unwrap(),
        WordGraphExit::Success
    );
    assert_eq!(fx.run(&["path", "to", "life"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["path", "new", "--json"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["rank", "--iterations", "5"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["rank", "new"]).unwrap(), WordGraphExit::Success);
    assert_eq!(fx.run(&["rank", "vulcan"]).unwrap(), WordGraphExit::NotFound);
}

#[test]
fn test_missing_path_word_maps_to_not_found() {
    let fx = Fixture::new(TEXT);
    let err = fx.run(&["path", "to", "klingon"]).unwrap_err();
    assert_eq!(WordGraphExit::from(&err), WordGraphExit::NotFound);
}

#[test]
fn test_weighted_rank_reads_reference() {
    let fx = Fixture::new(TEXT);
    let reference = fx.path("reference.txt");
    fs::write(&reference, "new new worlds life").unwrap();
    assert_eq!(
        fx.run(&["rank", "--weighted", &arg(&reference)]).unwrap(),
        WordGraphExit::Success
    );
    assert!(fx
        .run(&["rank", "--weighted", &arg(&fx.path("missing.txt"))])
        .is_err());
}

#[test]
fn test_bad_damping_rejected() {
    let fx = Fixture::new(TEXT);
    assert!(fx.run(&["rank", "--damping", "1.0"]).is_err());
}

#[test]
fn test_walk_saved_to_file() {
    let fx = Fixture::new(TEXT);
    let out = fx.path("walk.txt");
    assert_eq!(
        fx.run(&["walk", "--output", &arg(&out)]).unwrap(),
        WordGraphExit::Success
    );
    let saved = fs::read_to_string(&out).unwrap();
    let words: Vec<&str> = saved.split_whitespace().collect();
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_export_dot_only() {
    let fx = Fixture::new(TEXT);
    let stem = fx.path("graph");
    assert_eq!(
        fx.run(&["export", &arg(&stem), "--dot-only"]).unwrap(),
        WordGraphExit::Success
    );
    let dot = fs::read_to_string(stem.with_extension("dot")).unwrap();
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("\"new\" -> \"life\" [label=\"1\"];"));
}

#[test]
fn test_empty_text_is_invalid_input() {
    let fx = Fixture::new("... 123 ...");
    let err = fx.run(&["show"]).unwrap_err();
    assert_eq!(WordGraphExit::from(&err), WordGraphExit::InvalidInput);
}

#[test]
fn test_unreadable_text_is_generic_error() {
    let fx = Fixture::new(TEXT);
    fs::remove_file(&fx.text).unwrap();
    let err = fx.run(&["show"]).unwrap_err();
    assert_eq!(WordGraphExit::from(&err), WordGraphExit::Error);
}
