//! Events emitted by the engine for presentation, audio and persistence hosts.

use crate::core::FullRows;
use crate::types::{PieceKind, Position};

/// Something observable happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game started on an empty board
    GameStarted,
    /// A piece entered the board at `origin`; `next` is the new preview
    PieceSpawned {
        kind: PieceKind,
        origin: Position,
        next: PieceKind,
    },
    /// A left/right/rotate/hard-drop attempt; rejected attempts change nothing
    PieceMoved { kind: PieceKind, accepted: bool },
    /// The falling piece was written into the board
    PieceLocked { kind: PieceKind },
    /// Rows were removed by the last lock
    ///
    /// `rows` are indices before removal; `flash_ms` is how long a host may
    /// flash them. The grid has already been updated.
    LinesCleared {
        rows: FullRows,
        score_delta: u32,
        combo_after: u32,
        was_tetris: bool,
        flash_ms: u32,
    },
    ScoreChanged { score: u32, level: u32 },
    /// The fall interval shrank
    SpeedIncreased {
        fall_interval_ms: u32,
        speed_level: u32,
    },
    FeverStarted,
    FeverEnded,
    GameOver { final_score: u32, new_high_score: bool },
}

/// Sounds a host may play for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Move,
    LineClear,
    Fever,
}

impl GameEvent {
    /// Cue for this event, if it has one
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::GameStarted => Some(SoundCue::Move),
            GameEvent::PieceMoved { accepted: true, .. } => Some(SoundCue::Move),
            GameEvent::LinesCleared { .. } => Some(SoundCue::LineClear),
            GameEvent::FeverStarted => Some(SoundCue::Fever),
            _ => None,
        }
    }

    /// Whether hosts should persist after this event
    pub fn affects_score(&self) -> bool {
        matches!(
            self,
            GameEvent::LinesCleared { .. } | GameEvent::GameOver { .. }
        )
    }
}
