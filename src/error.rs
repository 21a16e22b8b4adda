use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Match directory not found: {0}")]
    MatchDirMissing(PathBuf),

    #[error("No match files found in {0}")]
    NoMatchFiles(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error in {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors that end the run with a notice rather than a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AppError::MatchDirMissing(_) | AppError::NoMatchFiles(_))
    }
}
