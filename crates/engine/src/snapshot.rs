use arrayvec::ArrayVec;

use crate::core::{ActivePiece, Board, ShapeMatrix};
use crate::state::{GameStats, Phase};
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Copy of the falling piece for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub origin: Position,
    pub shape: ShapeMatrix,
    /// Occupied board coordinates (rows may be negative)
    pub cells: ArrayVec<Position, 4>,
    /// Where a hard drop would land
    pub ghost_origin: Position,
}

impl ActiveSnapshot {
    pub fn capture(piece: &ActivePiece, board: &Board) -> Self {
        Self {
            kind: piece.kind(),
            origin: piece.origin(),
            shape: *piece.shape(),
            cells: piece.cells().collect(),
            ghost_origin: piece.landing_origin(board),
        }
    }
}

/// Owned view of the engine that can be handed to another thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub next_kind: PieceKind,
    pub next_shape: ShapeMatrix,
    pub stats: GameStats,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Cell at (row, col), `None` when empty or out of range
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

pub(crate) fn board_grid(board: &Board) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut grid = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
    for (out, row) in grid.iter_mut().zip(board.rows()) {
        out.copy_from_slice(row);
    }
    grid
}
