// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, ExportConfig, ImageFormat, RankConfig, WalkConfig};

use std::path::Path;

use crate::error::{GraphError, Result};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit` if given, else `wordgraph.toml` from the working
    /// directory if present, else the defaults.
    ///
    /// # Errors
    /// Returns error if a named file is missing, or any file fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return io::load_toml_config(path);
        }
        let local = Path::new(CONFIG_FILE);
        if local.is_file() {
            return io::load_toml_config(local);
        }
        Ok(Self::new())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    /// Returns a config error if the damping factor is outside (0, 1).
    pub fn validate(&self) -> Result<()> {
        let d = self.rank.damping;
        if !(d > 0.0 && d < 1.0) {
            return Err(GraphError::Config(format!(
                "rank.damping must be between 0 and 1 (exclusive), got {d}"
            )));
        }
        Ok(())
    }

    /// Saves the configuration as TOML.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}
