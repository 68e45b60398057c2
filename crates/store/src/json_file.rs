use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{SavedState, StateStore};

/// Stores the record as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a save is written to before it replaces `path`
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<SavedState>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved state");
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read state file {}", self.path.display()))?;
        let state = serde_json::from_str(&text)
            .with_context(|| format!("parse state file {}", self.path.display()))?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &SavedState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create state directory {}", dir.display()))?;
        }

        // the real file is only ever replaced whole
        let line = serde_json::to_string(state)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, line).with_context(|| format!("write state file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace state file {}", self.path.display()))?;
        debug!(path = %self.path.display(), high_score = state.high_score, "state saved");
        Ok(())
    }
}
