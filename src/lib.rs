//! Neo Tetris arcade engine (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so hosts and the
//! integration tests depend on `neo_tetris::{core,engine,store,types}`.

pub use neo_tetris_core as core;
pub use neo_tetris_engine as engine;
pub use neo_tetris_store as store;
pub use neo_tetris_types as types;
