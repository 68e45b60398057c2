//! Active piece module - the falling piece and collision detection
//!
//! A piece is a kind, its current shape matrix and the board position of the
//! matrix's top-left corner. Every move is an attempt: the candidate state is
//! checked with [`collides`] and committed only if it is free.

use crate::board::Board;
use crate::shapes::{shape_for, ShapeMatrix};
use crate::types::{PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_POSITION};

/// Whether `shape` anchored at `origin` hits a wall, the floor or a filled cell
///
/// Cells above the board (negative rows) never collide, so pieces can spawn or
/// rotate partially above row 0.
pub fn collides(board: &Board, shape: &ShapeMatrix, origin: Position) -> bool {
    shape.cells().any(|(dy, dx)| {
        let row = origin.row + dy as i8;
        let col = origin.col + dx as i8;
        if col < 0 || col as usize >= BOARD_WIDTH || row >= BOARD_HEIGHT as i8 {
            return true;
        }
        row >= 0 && board.is_occupied(row, col)
    })
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: ShapeMatrix,
    origin: Position,
}

impl ActivePiece {
    /// A fresh piece in its canonical shape at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, shape_for(kind), SPAWN_POSITION)
    }

    pub fn new(kind: PieceKind, shape: ShapeMatrix, origin: Position) -> Self {
        Self {
            kind,
            shape,
            origin,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Check the piece against the board in its current state
    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.shape, self.origin)
    }

    /// Try to move by (drow, dcol); returns whether the move was committed
    pub fn try_shift(&mut self, board: &Board, drow: i8, dcol: i8) -> bool {
        let target = self.origin.offset(drow, dcol);
        if collides(board, &self.shape, target) {
            return false;
        }
        self.origin = target;
        true
    }

    /// Try to rotate 90° clockwise in place; no kicks are attempted
    pub fn try_rotate_cw(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        if collides(board, &rotated, self.origin) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// How many rows the piece can fall before it would collide
    ///
    /// Probes candidate positions without moving the piece.
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while !collides(board, &self.shape, self.origin.offset(distance + 1, 0)) {
            distance += 1;
        }
        distance
    }

    /// Position a hard drop would commit
    pub fn landing_origin(&self, board: &Board) -> Position {
        self.origin.offset(self.drop_distance(board), 0)
    }

    /// Commit the piece to a position (used after probing)
    pub fn set_origin(&mut self, origin: Position) {
        self.origin = origin;
    }

    /// Write the piece into the board
    pub fn lock_into(&self, board: &mut Board) {
        board.place(&self.shape, self.origin, self.kind);
    }

    /// Board coordinates of every occupied cell (may include negative rows)
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let origin = self.origin;
        self.shape
            .cells()
            .map(move |(dy, dx)| origin.offset(dy as i8, dx as i8))
    }
}
