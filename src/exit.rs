// src/exit.rs
//! Standardized process exit codes for `wordgraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input text held no words.
    InvalidInput = 2,
    /// A queried word is not in the graph.
    NotFound = 3,
    /// Graphviz could not render the exported graph.
    RenderFailed = 4,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&anyhow::Error> for WordGraphExit {
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<crate::error::GraphError>() {
            Some(crate::error::GraphError::EmptyText) => Self::InvalidInput,
            Some(crate::error::GraphError::WordNotFound { .. }) => Self::NotFound,
            _ => Self::Error,
        }
    }
}
