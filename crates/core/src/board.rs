//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right).

use arrayvec::ArrayVec;

use crate::shapes::ShapeMatrix;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Row indices reported by [`Board::full_rows`]
pub type FullRows = ArrayVec<usize, BOARD_HEIGHT>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        Some((row as usize) * BOARD_WIDTH + (col as usize))
    }

    /// Whether (row, col) lies on the board
    #[inline(always)]
    pub fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && (row as usize) < BOARD_HEIGHT && col >= 0 && (col as usize) < BOARD_WIDTH
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if (row, col) is filled
    ///
    /// Callers must bound-check first; an out-of-range query is a logic error
    /// (asserted in debug builds, reported as empty otherwise).
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        debug_assert!(
            Self::in_bounds(row, col),
            "occupancy query out of range: ({}, {})",
            row,
            col
        );
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Write `kind` into every board cell covered by `shape` anchored at `origin`
    ///
    /// Cells above the board (negative rows) are clipped. Columns must be in range.
    pub fn place(&mut self, shape: &ShapeMatrix, origin: Position, kind: PieceKind) {
        for (dy, dx) in shape.cells() {
            let row = origin.row + dy as i8;
            let col = origin.col + dx as i8;
            if row < 0 {
                continue;
            }
            let written = self.set(row, col, Some(kind));
            debug_assert!(written, "placed cell out of range: ({}, {})", row, col);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, ascending
    pub fn full_rows(&self) -> FullRows {
        (0..BOARD_HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and insert as many empty rows at the top
    ///
    /// Remaining rows keep their relative order. Uses a two-pointer compaction
    /// from the bottom up, so indices in `rows` refer to the board as it was
    /// before the call. Out-of-range indices are ignored.
    pub fn clear(&mut self, rows: &[usize]) {
        let mut write_y = BOARD_HEIGHT;

        for read_y in (0..BOARD_HEIGHT).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * BOARD_WIDTH;
                self.cells
                    .copy_within(src..src + BOARD_WIDTH, write_y * BOARD_WIDTH);
            }
        }

        for cell in &mut self.cells[..write_y * BOARD_WIDTH] {
            *cell = None;
        }
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Fill an entire row with `kind` (handy for setting up positions)
    pub fn fill_row(&mut self, row: usize, kind: PieceKind) {
        if row >= BOARD_HEIGHT {
            return;
        }
        let start = row * BOARD_WIDTH;
        for cell in &mut self.cells[start..start + BOARD_WIDTH] {
            *cell = Some(kind);
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Convert to 2D vector for display/persistence
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_for;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
    }

    #[test]
    fn test_place_clips_rows_above_board() {
        let mut board = Board::new();
        // vertical I anchored one row above the top: only 3 cells land
        let shape = shape_for(PieceKind::I).rotated_cw();
        board.place(&shape, Position::new(-1, 0), PieceKind::I);

        assert_eq!(board.filled_count(), 3);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(2, 0));
        assert!(!board.is_occupied(3, 0));
    }

    #[test]
    fn test_full_rows_ascending() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::I);
        board.fill_row(7, PieceKind::O);
        board.fill_row(12, PieceKind::T);
        board.set(12, 3, None);

        assert_eq!(board.full_rows().as_slice(), &[7, 19]);
    }

    #[test]
    fn test_clear_shifts_rows_down() {
        let mut board = Board::new();
        board.set(17, 0, Some(PieceKind::S));
        board.fill_row(18, PieceKind::I);
        board.set(19, 5, Some(PieceKind::Z));

        board.clear(&[18]);

        assert_eq!(board.get(18, 0), Some(Some(PieceKind::S)));
        assert_eq!(board.get(19, 5), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled_count(), 2);
        assert!(board.row(0).iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_reset_empties_board() {
        let mut board = Board::new();
        board.fill_row(3, PieceKind::J);
        board.reset();
        assert_eq!(board, Board::new());
    }
}
