//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, persistence, presentation hosts).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: row 0, column 4
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 1000 | Fall interval at the start of a game |
//! | `MIN_FALL_MS` | 100 | Fall interval floor |
//! | `SPEED_UP_PERIOD_MS` | 30000 | Period of the speed-up timer |
//! | `FEVER_DURATION_MS` | 3000 | Fever mode length |
//! | `CLEAR_FLASH_MS` | 300 | Suggested duration of the line-clear flash |
//!
//! # Speed Progression
//!
//! Every speed-up period the fall interval is multiplied by
//! `SPEED_UP_NUMERATOR / SPEED_UP_DENOMINATOR` (0.85) and floored, never
//! going below `MIN_FALL_MS`.
//!
//! # Examples
//!
//! ```
//! use neo_tetris_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Column at which new pieces are anchored
pub const SPAWN_COL: i8 = 4;

/// Row at which new pieces are anchored
pub const SPAWN_ROW: i8 = 0;

/// Fall interval when a game starts (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Fall interval floor (100ms)
pub const MIN_FALL_MS: u32 = 100;

/// Speed-up timer period (30s)
pub const SPEED_UP_PERIOD_MS: u32 = 30_000;

/// Speed-up factor numerator (85/100 = 0.85)
pub const SPEED_UP_NUMERATOR: u32 = 85;

/// Speed-up factor denominator
pub const SPEED_UP_DENOMINATOR: u32 = 100;

/// Speed meter starting value
pub const SPEED_LEVEL_START: u32 = 1;

/// Speed meter cap
pub const SPEED_LEVEL_MAX: u32 = 20;

/// Fever mode duration (3s)
pub const FEVER_DURATION_MS: u32 = 3000;

/// Suggested duration of the cosmetic line-clear flash
pub const CLEAR_FLASH_MS: u32 = 300;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared row, before the combo multiplier
pub const LINE_SCORE_BASE: u32 = 100;

/// Rows cleared by a single lock that count as a tetris (and start fever mode)
pub const TETRIS_ROWS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcade_timing_defaults() {
        assert_eq!(BASE_FALL_MS, 1000);
        assert_eq!(MIN_FALL_MS, 100);
        assert_eq!(SPEED_UP_PERIOD_MS, 30_000);
        assert_eq!(FEVER_DURATION_MS, 3000);
        assert_eq!(CLEAR_FLASH_MS, 300);
        assert_eq!(SPEED_LEVEL_MAX, 20);
    }

    #[test]
    fn command_round_trips_through_str() {
        for command in Command::ALL {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::from_str("hold"), None);
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neo_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Player input commands
///
/// Commands are only processed while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (locks if it cannot fall)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::RotateCw,
        Command::HardDrop,
    ];

    /// Parse command from string (case-insensitive camelCase)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotatecw" => Some(Command::RotateCw),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Timers the engine asks its host to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Gravity tick, re-armed at the current fall interval
    Fall,
    /// Periodic speed-up
    SpeedUp,
    /// One-shot end of fever mode
    FeverExpiry,
}

/// Board coordinate of a shape's top-left anchor
///
/// `row` may be negative while a piece pokes above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Position shifted by the given deltas
    pub const fn offset(self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// Spawn anchor for every new piece
pub const SPAWN_POSITION: Position = Position::new(SPAWN_ROW, SPAWN_COL);

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
