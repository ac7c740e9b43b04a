//! Shape catalog - tetromino cell matrices and rotation.
//!
//! Each of the 7 kinds maps to an immutable base matrix of boolean cells
//! (rows × cols, origin at the top-left). Rotation is the naive
//! "reverse row order, then transpose" clockwise transform with no
//! re-centering and no kick search; a rotated matrix is a new value and the
//! catalog entries are never mutated.

use crate::types::PieceKind;

/// Maximum extent of any shape matrix in either dimension
pub const SHAPE_MAX: usize = 4;

/// A piece cell matrix.
///
/// Stored as a fixed 4x4 backing grid with explicit `rows`/`cols` so that
/// rotation (which swaps the dimensions) stays allocation-free. Cells outside
/// `rows × cols` are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    const fn new(rows: u8, cols: u8, cells: [[bool; SHAPE_MAX]; SHAPE_MAX]) -> Self {
        Self { rows, cols, cells }
    }

    /// Number of rows in the matrix
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the matrix
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is filled.
    ///
    /// Out-of-matrix coordinates read as empty.
    pub fn filled(&self, row: u8, col: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row as usize][col as usize]
    }

    /// Iterate over the (row, col) offsets of all filled cells
    pub fn filled_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.filled(r, c))
    }

    /// Rotate 90° clockwise: reverse row order, then transpose.
    ///
    /// The result has swapped dimensions; the original is left untouched.
    pub fn rotate_cw(&self) -> Shape {
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                // new[c][rows - 1 - r] = old[r][c]
                cells[c][self.rows as usize - 1 - r] = self.cells[r][c];
            }
        }
        Shape::new(self.cols, self.rows, cells)
    }
}

const X: bool = true;
const O: bool = false;

/// I piece: 1x4 horizontal bar
const I_SHAPE: Shape = Shape::new(
    1,
    4,
    [
        [X, X, X, X],
        [O, O, O, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// J piece: 2x3
const J_SHAPE: Shape = Shape::new(
    2,
    3,
    [
        [X, O, O, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// L piece: 2x3 (mirror of J)
const L_SHAPE: Shape = Shape::new(
    2,
    3,
    [
        [O, O, X, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// O piece: 2x2 square
const O_SHAPE: Shape = Shape::new(
    2,
    2,
    [
        [X, X, O, O],
        [X, X, O, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// S piece: 2x3
const S_SHAPE: Shape = Shape::new(
    2,
    3,
    [
        [O, X, X, O],
        [X, X, O, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// T piece: 2x3
const T_SHAPE: Shape = Shape::new(
    2,
    3,
    [
        [O, X, O, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// Z piece: 2x3 (mirror of S)
const Z_SHAPE: Shape = Shape::new(
    2,
    3,
    [
        [X, X, O, O],
        [O, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
);

/// Get the base (unrotated) cell matrix for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
