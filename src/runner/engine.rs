//! Locating the analysis executable

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[cfg(windows)]
pub const DEFAULT_ENGINE_NAME: &str = "projectfinal.exe";
#[cfg(not(windows))]
pub const DEFAULT_ENGINE_NAME: &str = "projectfinal";

/// Where to look for the engine: a base directory plus an optional override.
#[derive(Debug, Clone)]
pub struct EngineLocator {
    base_dir: PathBuf,
    path_override: Option<PathBuf>,
}

impl EngineLocator {
    pub fn new(base_dir: impl Into<PathBuf>, path_override: Option<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            path_override,
        }
    }

    /// Path the engine is expected at, whether or not it exists.
    pub fn expected_path(&self) -> PathBuf {
        match &self.path_override {
            Some(path) => self.base_dir.join(path),
            None => self.base_dir.join(DEFAULT_ENGINE_NAME),
        }
    }

    pub fn resolve(&self) -> Result<PathBuf> {
        let path = self.expected_path();
        if is_file(&path) {
            Ok(path)
        } else {
            Err(Error::EngineNotFound(path))
        }
    }
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
