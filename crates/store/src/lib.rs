//! Store module - persisted arcade state
//!
//! The engine writes a small JSON record after every score-affecting event and
//! on game over. Only `high_score` is read back when a session starts; the
//! remaining fields describe the last written game and are not restored.
//!
//! # Backends
//!
//! - [`JsonFileStore`]: one JSON file on disk (the default for hosts)
//! - [`MemoryStore`]: in-process record, used by tests and embedded hosts
//! - [`NullStore`]: persists nothing
//!
//! # Environment Variables
//!
//! - `NEO_TETRIS_STATE_PATH`: Override the state file location
//! - `NEO_TETRIS_STATE_DISABLED`: Set to "1" or "true" to disable persistence
//!
//! # Example Record
//!
//! ```text
//! {"high_score":1200,"score":300,"level":1,"speed":850,"combo":0,"lines_cleared":3,
//!  "board":[[null,null,...,"#00ffff"], ...]}
//! ```

pub mod config;
pub mod json_file;
pub mod memory;
pub mod record;

pub use config::StoreConfig;
pub use json_file::JsonFileStore;
pub use memory::{MemoryStore, NullStore};
pub use record::SavedState;

/// Load/save gateway for the persisted record
pub trait StateStore {
    /// Read the last record, `Ok(None)` when nothing has been saved yet
    fn load(&mut self) -> anyhow::Result<Option<SavedState>>;

    /// Replace the stored record
    fn save(&mut self, state: &SavedState) -> anyhow::Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn load(&mut self) -> anyhow::Result<Option<SavedState>> {
        (**self).load()
    }

    fn save(&mut self, state: &SavedState) -> anyhow::Result<()> {
        (**self).save(state)
    }
}
