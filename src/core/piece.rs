//! Active piece - a positioned, rotatable instance of a shape.
//!
//! The piece tracks its kind as a first-class field alongside the current
//! (possibly rotated) cell matrix, so the bot can rebuild candidates from the
//! catalog without reverse shape lookups.

use crate::core::board::Board;
use crate::core::pieces::{base_shape, Shape};
use crate::types::{BOARD_WIDTH, PieceKind};

/// A falling piece: kind, current cell matrix, and board coordinates of the
/// matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered, top row.
    ///
    /// The invariant `shape` = some clockwise rotation of `base_shape(kind)`
    /// holds from here on; only [`try_rotate_cw`](Self::try_rotate_cw)
    /// replaces the matrix.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: BOARD_WIDTH as i8 / 2 - shape.cols() as i8 / 2,
            y: 0,
        }
    }

    /// Whether the piece is valid at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.shape, self.x, self.y)
    }

    /// Translate by (dx, dy) if the destination validates.
    ///
    /// An invalid request leaves the piece unchanged and returns false.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        if board.is_valid_placement(&self.shape, self.x + dx, self.y + dy) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Rotate 90° clockwise if the rotated matrix validates at the unchanged
    /// origin. No kick attempts: a blocked rotation is refused outright.
    pub fn try_rotate_cw(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotate_cw();
        if board.is_valid_placement(&rotated, self.x, self.y) {
            self.shape = rotated;
            true
        } else {
            false
        }
    }
}

/// Project the piece's hard-drop resting row.
///
/// Steps down from the current row while the next row validates and returns
/// the last valid one. Shared by ghost rendering, hard-drop execution, and
/// the bot's placement simulation.
pub fn project_drop(board: &Board, piece: &Piece) -> i8 {
    let mut y = piece.y;
    while board.is_valid_placement(&piece.shape, piece.x, y + 1) {
        y += 1;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_horizontally_centered() {
        // I: cols=4 -> x = 5 - 2 = 3. O: cols=2 -> x = 5 - 1 = 4.
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn project_drop_on_empty_board() {
        let board = Board::new();
        // I spawns as a 1-row bar; it rests on the bottom row.
        let piece = Piece::spawn(PieceKind::I);
        assert_eq!(project_drop(&board, &piece), 19);
        // O is two rows tall; its top-left rests at 18.
        let piece = Piece::spawn(PieceKind::O);
        assert_eq!(project_drop(&board, &piece), 18);
    }

    #[test]
    fn project_drop_lands_on_stack() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, true);
        }
        let piece = Piece::spawn(PieceKind::O);
        assert_eq!(project_drop(&board, &piece), 17);
    }

    #[test]
    fn blocked_rotation_leaves_shape_unmodified() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);

        // Wall off the cells a vertical I would need.
        for y in 1..4 {
            board.set(piece.x, y, true);
            board.set(piece.x + 1, y, true);
            board.set(piece.x + 2, y, true);
            board.set(piece.x + 3, y, true);
        }

        let before = piece;
        assert!(!piece.try_rotate_cw(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn blocked_move_is_a_no_op() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::L);
        piece.x = 0;
        let before = piece;
        assert!(!piece.try_move(&board, -1, 0));
        assert_eq!(piece, before);
        assert!(piece.try_move(&board, 1, 0));
        assert_eq!(piece.x, 1);
    }
}
