//! Move search - exhaustive placement enumeration for the active piece.
//!
//! Tries every rotation count (0..4) and every column in a padded range,
//! projects each candidate to its resting row, merges it into a scratch
//! board, and keeps the best evaluator score. Enumeration order is
//! rotation-major with columns ascending, and ties keep the first candidate,
//! so results are fully deterministic for a given board and piece kind.

use crate::bot::evaluator::evaluate;
use crate::core::{base_shape, project_drop, Board, Piece};
use crate::types::{BOARD_WIDTH, PieceKind};

/// Leftmost column the search probes. Padded past the board edge to tolerate
/// shapes whose bounding box starts with empty columns.
const COLUMN_MIN: i8 = -2;

/// Rightmost column the search probes
const COLUMN_MAX: i8 = BOARD_WIDTH as i8 + 1;

/// A chosen placement for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Target column for the piece origin
    pub column: i8,
    /// Row the piece rests on after dropping
    pub resting_y: i8,
    /// Clockwise rotations to apply before moving
    pub rotations: u8,
}

/// Find the best placement for a piece of the given kind.
///
/// Candidates are rebuilt from the kind's unrotated base shape, not from the
/// live (possibly already rotated) piece. Returns `None` only when no
/// candidate can even spawn, which the driver treats as an imminent loss.
pub fn find_best_move(board: &Board, kind: PieceKind) -> Option<Placement> {
    let mut best_score = f32::NEG_INFINITY;
    let mut best_move = None;

    for rotations in 0..4u8 {
        let mut shape = base_shape(kind);
        for _ in 0..rotations {
            shape = shape.rotate_cw();
        }

        for column in COLUMN_MIN..=COLUMN_MAX {
            if !board.is_valid_placement(&shape, column, 0) {
                continue;
            }

            let candidate = Piece {
                kind,
                shape,
                x: column,
                y: 0,
            };
            let resting_y = project_drop(board, &candidate);

            let mut scratch = board.clone();
            scratch.merge(&shape, column, resting_y);

            // Strict greater-than: the first candidate wins ties, so lowest
            // rotation count then lowest column is the deterministic order.
            let score = evaluate(&scratch);
            if score > best_score {
                best_score = score;
                best_move = Some(Placement {
                    column,
                    resting_y,
                    rotations,
                });
            }
        }
    }

    best_move
}
