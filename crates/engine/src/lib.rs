//! Engine crate - the timed, event-driven game built on the pure core
//!
//! [`GameEngine`] owns the board, the falling piece, the counters and the
//! timer handles. It is driven by two inputs:
//!
//! - player [`Command`](types::Command)s via [`GameEngine::apply`]
//! - fired timers via [`GameEngine::on_timer`]
//!
//! Both run to completion on the caller's thread and append [`GameEvent`]s.
//! Collaborators are injected: a [`Scheduler`] for deadlines, a
//! [`PieceSource`](core::PieceSource) for piece kinds and a
//! [`StateStore`](store::StateStore) for persistence. Persistence failures are
//! logged and never interrupt play.
//!
//! # Example
//!
//! ```
//! use neo_tetris_engine::{GameEngine, GameEvent, Phase};
//! use neo_tetris_engine::types::Command;
//!
//! let mut engine = GameEngine::headless(7);
//! engine.new_game();
//! assert_eq!(engine.phase(), Phase::Running);
//!
//! engine.apply(Command::HardDrop);
//! engine.advance(1000);
//!
//! let events = engine.drain_events();
//! assert_eq!(events[0], GameEvent::GameStarted);
//! ```

pub mod config;
pub mod engine;
pub mod events;
pub mod scheduler;
pub mod snapshot;
pub mod state;

pub use neo_tetris_core as core;
pub use neo_tetris_store as store;
pub use neo_tetris_types as types;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use events::{GameEvent, SoundCue};
pub use scheduler::{Scheduler, TimerHandle, VirtualScheduler};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use state::{GameStats, Phase};
