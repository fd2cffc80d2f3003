//! Error types for rld
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rld operations
pub type RldResult<T> = Result<T, RldError>;

/// Main error type for rld operations
#[derive(Error, Debug)]
pub enum RldError {
    /// The path given on the command line does not exist
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Directory mode requires a project manifest in the root
    #[error("no {manifest} file found in {root}, exiting")]
    MissingManifest { root: PathBuf, manifest: String },

    /// Single-file mode was pointed at something that is not a source file
    #[error("{path} is not a source file (expected extension: {expected})")]
    NotSourceFile { path: PathBuf, expected: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A skip pattern could not be compiled
    #[error("invalid skip pattern '{pattern}': {message}")]
    InvalidSkipPattern { pattern: String, message: String },

    /// The change source failed; the session cannot continue without it
    #[error("watch error: {message}")]
    Watch { message: String },

    /// The child process could not be spawned
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Installing the SIGINT/SIGTERM handler failed
    #[error("failed to install signal handler: {message}")]
    SignalHandler { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for RldError {
    fn from(err: notify::Error) -> Self {
        RldError::Watch {
            message: err.to_string(),
        }
    }
}

impl RldError {
    /// Errors raised before any watch or launch happens.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RldError::PathNotFound { .. }
                | RldError::MissingManifest { .. }
                | RldError::NotSourceFile { .. }
                | RldError::InvalidConfig { .. }
                | RldError::InvalidSkipPattern { .. }
        )
    }
}
