//! Front-end settings
//!
//! Read once at startup from `$DNA_GUI_CONFIG`, or `settings.json` next to the
//! executable. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_ENV_VAR: &str = "DNA_GUI_CONFIG";
pub const CONFIG_FILE_NAME: &str = "settings.json";
pub const DEFAULT_BACKGROUND: &str = "background.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Analysis executable. Relative paths resolve against the executable dir.
    pub engine_path: Option<PathBuf>,
    /// Background image. Relative paths resolve against the executable dir.
    pub background_image: Option<PathBuf>,
    /// Ask for a replacement image when the configured one is missing.
    pub prompt_for_background: bool,
    pub poll_interval_ms: u64,
    pub resize_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_path: None,
            background_image: None,
            prompt_for_background: true,
            poll_interval_ms: 100,
            resize_debounce_ms: 100,
        }
    }
}

impl Settings {
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(path, &json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load from the standard location. Errors are logged and replaced by defaults.
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| app_dir().join(CONFIG_FILE_NAME));

        match Self::load(&path) {
            Ok(settings) => {
                log::debug!("Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn background_path(&self, base: &Path) -> PathBuf {
        let configured = self
            .background_image
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_BACKGROUND));
        base.join(configured)
    }
}

/// Directory holding the running executable, or the working directory if
/// that cannot be determined.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(Path::new("s.json"), r#"{"poll_interval_ms": 250}"#).unwrap();
        assert_eq!(settings.poll_interval(), Duration::from_millis(250));
        assert_eq!(settings.resize_debounce_ms, 100);
        assert!(settings.prompt_for_background);
        assert!(settings.engine_path.is_none());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = Settings::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
        match err {
            Error::Config { path, .. } => assert_eq!(path, PathBuf::from("bad.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"engine_path": "bin/engine", "prompt_for_background": false}"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.engine_path, Some(PathBuf::from("bin/engine")));
        assert!(!settings.prompt_for_background);
    }

    #[test]
    fn test_background_path() {
        let base = Path::new("/opt/app");
        let mut settings = Settings::default();
        assert_eq!(settings.background_path(base), base.join("background.jpg"));

        settings.background_image = Some(PathBuf::from("/images/dna.png"));
        assert_eq!(
            settings.background_path(base),
            PathBuf::from("/images/dna.png")
        );
    }
}
