// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The source text produced no tokens, so no graph was built.
    #[error("Text contains no words; no graph was built")]
    EmptyText,

    #[error("No {word} in the graph!")]
    WordNotFound { word: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    pub(crate) fn not_found(word: &str) -> Self {
        Self::WordNotFound {
            word: word.to_lowercase(),
        }
    }

    /// The missing word, if this is a lookup failure.
    #[must_use]
    pub fn missing_word(&self) -> Option<&str> {
        match self {
            Self::WordNotFound { word } => Some(word),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}
