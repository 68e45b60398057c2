//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/board model and the rules that do not depend
//! on time: collision, locking, line clearing and scoring. Timers, events and
//! persistence live in the engine crate.
//!
//! - **Deterministic**: piece selection goes through an injected [`PieceSource`]
//! - **Zero-allocation**: the board is a flat array and shapes are fixed-size
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 piece matrices, clockwise rotation and display colors
//! - [`board`]: 20x10 grid with occupancy queries, placement and row clearing
//! - [`piece`]: the falling piece and the [`collides`] predicate
//! - [`scoring`]: combo scoring, level formula and fall-interval progression
//! - [`rng`]: piece sources (uniform random, scripted) and a seedable LCG
//!
//! # Example
//!
//! ```
//! use neo_tetris_core::{ActivePiece, Board};
//! use neo_tetris_core::types::PieceKind;
//!
//! let mut board = Board::new();
//! let mut piece = ActivePiece::spawn(PieceKind::I);
//! assert!(piece.try_shift(&board, 0, -4));
//!
//! let landing = piece.landing_origin(&board);
//! piece.set_origin(landing);
//! piece.lock_into(&mut board);
//! assert_eq!(board.filled_count(), 4);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use neo_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FullRows};
pub use piece::{collides, ActivePiece};
pub use rng::{PieceSource, RandomPieces, SequencePieces, SimpleRng};
pub use scoring::{is_tetris, level_for_lines, line_clear_score, next_fall_interval};
pub use shapes::{color_for, shape_for, Color, ShapeMatrix};
