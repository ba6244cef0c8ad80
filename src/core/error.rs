//! Error types for the treeline plugin

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for plugin operations
pub type TreelineResult<T> = Result<T, TreelineError>;

/// Main error type for the treeline plugin
#[derive(Error, Debug)]
pub enum TreelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Please install treeline using 'npm install -g treeline'")]
    TreelineNotInstalled,

    #[error("Error writing configuration {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not link {link} to {target}: {source}")]
    IgnoreLink {
        link: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },

    #[error("Error starting command {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Command '{command}' failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Platform error: {0}")]
    Platform(String),
}

impl TreelineError {
    /// Create a platform error from a string
    pub fn platform<S: Into<String>>(msg: S) -> Self {
        TreelineError::Platform(msg.into())
    }
}
