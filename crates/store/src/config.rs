//! Store configuration from the environment.

use std::env;
use std::path::PathBuf;

use crate::{JsonFileStore, NullStore, StateStore};

/// Directory name under the platform data directory
pub const APP_DIR: &str = "MacanTetrisNeoArcade";

/// File name of the saved record
pub const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `None` disables persistence
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        if Self::is_disabled() {
            return Self { path: None };
        }

        let path = env::var("NEO_TETRIS_STATE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
            .or_else(default_state_path);

        Self { path }
    }

    pub fn is_disabled() -> bool {
        env::var("NEO_TETRIS_STATE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    /// Open the configured backend
    pub fn open(&self) -> Box<dyn StateStore> {
        match &self.path {
            Some(path) => Box::new(JsonFileStore::new(path.clone())),
            None => Box::new(NullStore),
        }
    }
}

/// Platform data location of the state file
///
/// `%USERPROFILE%\AppData\Local\<app>\state.json` on Windows,
/// `$HOME/.local/share/<app>/state.json` elsewhere. `None` without a home directory.
pub fn default_state_path() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        env::var_os("USERPROFILE").map(|h| PathBuf::from(h).join("AppData").join("Local"))
    } else {
        env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
    };
    base.map(|b| b.join(APP_DIR).join(STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Some(path) = default_state_path() {
            assert!(path.ends_with(PathBuf::from(APP_DIR).join(STATE_FILE)));
        }
    }

    #[test]
    fn test_disabled_config_opens_null_store() {
        let config = StoreConfig { path: None };
        let mut store = config.open();
        assert!(store.load().unwrap().is_none());
    }

    // One test owns both variables so parallel tests never see a half-set environment.
    #[test]
    fn test_store_config_from_env() {
        env::remove_var("NEO_TETRIS_STATE_PATH");

        for value in ["1", "true", "TRUE"] {
            env::set_var("NEO_TETRIS_STATE_DISABLED", value);
            assert!(StoreConfig::is_disabled(), "{}", value);
            assert_eq!(StoreConfig::from_env().path, None);
        }

        env::set_var("NEO_TETRIS_STATE_DISABLED", "0");
        assert!(!StoreConfig::is_disabled());
        assert_eq!(StoreConfig::from_env().path, default_state_path());

        env::remove_var("NEO_TETRIS_STATE_DISABLED");
        env::set_var("NEO_TETRIS_STATE_PATH", "  /var/tmp/neo/state.json ");
        assert_eq!(
            StoreConfig::from_env().path,
            Some(PathBuf::from("/var/tmp/neo/state.json"))
        );

        // blank override falls back to the platform location
        env::set_var("NEO_TETRIS_STATE_PATH", "   ");
        assert_eq!(StoreConfig::from_env().path, default_state_path());

        env::remove_var("NEO_TETRIS_STATE_PATH");
    }
}
