// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::{GraphError, Result};

pub const CONFIG_FILE: &str = "wordgraph.toml";

/// Reads and parses a config file.
///
/// # Errors
/// Returns an I/O error naming the path, or a config error for bad TOML.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content)
}

/// Parses TOML; missing sections and keys take their defaults.
///
/// # Errors
/// Returns a config error for malformed TOML or invalid values.
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Writes the config back out as TOML.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| GraphError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })
}
