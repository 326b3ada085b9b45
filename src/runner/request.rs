//! Analysis request and status messages

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Input/output pair handed to the engine for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl AnalysisRequest {
    /// Build a request from the two form fields.
    /// Fails if either is empty or whitespace.
    pub fn from_fields(input: &str, output: &str) -> Result<Self> {
        let input = input.trim();
        let output = output.trim();
        if input.is_empty() || output.is_empty() {
            return Err(Error::MissingSelection);
        }
        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        })
    }
}

/// Append `ext` when the user typed a file name without an extension.
pub fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    match path.extension() {
        Some(existing) if !existing.is_empty() => path,
        _ => path.with_extension(ext),
    }
}

/// Text shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Running,
    Completed { output: PathBuf },
    /// Engine exited non-zero; stderr is kept verbatim.
    Failed { stderr: String },
    /// The engine could not be run at all.
    Exception { reason: String },
}

impl StatusMessage {
    pub fn is_final(&self) -> bool {
        !matches!(self, StatusMessage::Running)
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Running => write!(f, "Running analysis..."),
            StatusMessage::Completed { output } => write!(
                f,
                "Analysis complete. Results saved to {}",
                output.display()
            ),
            StatusMessage::Failed { stderr } => write!(f, "Error: {stderr}"),
            StatusMessage::Exception { reason } => write!(f, "Exception: {reason}"),
        }
    }
}
