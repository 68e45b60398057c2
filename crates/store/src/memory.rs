use anyhow::{anyhow, Result};

use crate::{SavedState, StateStore};

/// Keeps the record in memory
///
/// A failing store rejects every load and save, which lets hosts and tests
/// check that gameplay carries on when persistence is broken.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<SavedState>,
    saves: usize,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record
    pub fn with_state(state: SavedState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    /// A store whose loads and saves always fail
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Last saved (or initial) record
    pub fn state(&self) -> Option<&SavedState> {
        self.state.as_ref()
    }

    /// Number of saves attempted
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SavedState>> {
        if self.failing {
            return Err(anyhow!("memory store: load rejected"));
        }
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &SavedState) -> Result<()> {
        self.saves += 1;
        if self.failing {
            return Err(anyhow!("memory store: save rejected"));
        }
        self.state = Some(state.clone());
        Ok(())
    }
}

/// Persists nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl StateStore for NullStore {
    fn load(&mut self) -> Result<Option<SavedState>> {
        Ok(None)
    }

    fn save(&mut self, _state: &SavedState) -> Result<()> {
        Ok(())
    }
}
