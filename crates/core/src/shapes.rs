//! Shapes module - tetromino cell matrices and display colors
//!
//! Every piece is described by a small row-major boolean matrix. Rotation
//! produces a new matrix (an N×M matrix becomes M×N), so there is no fixed
//! rotation table: a shape is whatever the catalog matrix has been turned into.

use crate::types::PieceKind;

/// Largest side of any tetromino matrix (the I piece is 1×4 / 4×1)
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupied cells of a piece in its current rotation
///
/// Cells outside `rows() × cols()` are always unset, so two matrices compare
/// equal exactly when their dimensions and occupied cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from literal rows (non-zero = occupied)
    ///
    /// Panics if the rows are ragged or exceed `MAX_SHAPE_DIM`.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", y);
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is occupied; false outside the matrix
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Occupied cells as `(row, col)` offsets, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |y| (0..self.cols()).map(move |x| (y, x)))
            .filter(move |&(y, x)| self.cells[y][x])
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise: `rotated[x][y] = shape[rows - 1 - y][x]`
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (x, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (y, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - y][x];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Convert to nested rows for presentation
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .map(|y| self.cells[y][..self.cols()].to_vec())
            .collect()
    }
}

/// Canonical (unrotated) shape for a piece kind
pub fn shape_for(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Display color tag for a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` name, as written into the saved board
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed display color for a piece kind
///
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Magenta
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
pub fn color_for(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::rgb(0, 255, 255),
        PieceKind::O => Color::rgb(255, 255, 0),
        PieceKind::T => Color::rgb(255, 0, 255),
        PieceKind::S => Color::rgb(0, 255, 0),
        PieceKind::Z => Color::rgb(255, 0, 0),
        PieceKind::J => Color::rgb(0, 0, 255),
        PieceKind::L => Color::rgb(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_for(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = shape_for(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let vertical = i.rotated_cw();
        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        assert!((0..4).all(|y| vertical.is_set(y, 0)));
    }

    #[test]
    fn test_t_rotates_clockwise() {
        // 0 1 0      1 0
        // 1 1 1  ->  1 1
        //            1 0
        let t = shape_for(PieceKind::T).rotated_cw();
        let expected = ShapeMatrix::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]);
        assert_eq!(t, expected);
    }

    #[test]
    fn test_four_rotations_cycle() {
        for kind in PieceKind::ALL {
            let shape = shape_for(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_color_names() {
        assert_eq!(color_for(PieceKind::I).name(), "#00ffff");
        assert_eq!(color_for(PieceKind::L).name(), "#ffa500");
    }
}
