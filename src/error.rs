//! Error types for the analysis front-end.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// One or both of the file fields were left empty.
    #[error("Please select both input and output files.")]
    MissingSelection,

    /// The analysis executable is not where we expected it.
    #[error("Analysis executable not found at {}", .0.display())]
    EngineNotFound(PathBuf),

    /// The worker thread could not be started.
    #[error("failed to start analysis worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// Background image could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Settings file exists but is not valid.
    #[error("invalid settings file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
