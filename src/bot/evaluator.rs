//! Heuristic evaluator - scores a hypothetical board state.
//!
//! Four features over the occupancy grid (with the candidate piece already
//! merged in, full rows not yet cleared):
//!
//! - `holes`: empty cells with at least one occupied cell above them in the
//!   same column
//! - `bumpiness`: sum of absolute height differences between adjacent columns
//! - `aggregate_height`: sum of all column heights
//! - `complete_lines`: fully occupied rows
//!
//! The weights are fixed constants; there is no learning or tuning.

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Penalty per hole
pub const W_HOLES: f32 = -4.0;

/// Penalty per unit of surface unevenness
pub const W_BUMPINESS: f32 = -2.0;

/// Penalty per unit of aggregate column height
pub const W_HEIGHT: f32 = -3.0;

/// Reward per completed line
pub const W_LINES: f32 = 3.0;

/// Height of each column: `BOARD_HEIGHT - topmost occupied row`, 0 if empty.
pub fn column_heights(board: &Board) -> [u8; BOARD_WIDTH as usize] {
    let mut heights = [0u8; BOARD_WIDTH as usize];
    for (col, height) in heights.iter_mut().enumerate() {
        for row in 0..BOARD_HEIGHT {
            if board.occupied(col as i8, row as i8) {
                *height = BOARD_HEIGHT - row;
                break;
            }
        }
    }
    heights
}

/// Count occupied-above-empty transitions per column.
///
/// An empty cell is a hole only once some occupied cell exists above it.
pub fn holes(board: &Board) -> u32 {
    let mut holes = 0;
    for col in 0..BOARD_WIDTH as i8 {
        let mut block_found = false;
        for row in 0..BOARD_HEIGHT as i8 {
            if board.occupied(col, row) {
                block_found = true;
            } else if block_found {
                holes += 1;
            }
        }
    }
    holes
}

/// Sum of `|height[c] - height[c+1]|` over adjacent column pairs
pub fn bumpiness(board: &Board) -> u32 {
    let heights = column_heights(board);
    heights
        .windows(2)
        .map(|pair| (pair[0] as i32 - pair[1] as i32).unsigned_abs())
        .sum()
}

/// Sum of all column heights
pub fn aggregate_height(board: &Board) -> u32 {
    column_heights(board).iter().map(|&h| h as u32).sum()
}

/// Count fully occupied rows
pub fn complete_lines(board: &Board) -> u32 {
    (0..BOARD_HEIGHT as usize)
        .filter(|&row| board.is_row_full(row))
        .count() as u32
}

/// Weighted sum of the four features. Higher is better.
pub fn evaluate(board: &Board) -> f32 {
    W_HOLES * holes(board) as f32
        + W_BUMPINESS * bumpiness(board) as f32
        + W_HEIGHT * aggregate_height(board) as f32
        + W_LINES * complete_lines(board) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(holes(&board), 0);
        assert_eq!(bumpiness(&board), 0);
        assert_eq!(aggregate_height(&board), 0);
        assert_eq!(complete_lines(&board), 0);
        assert_eq!(evaluate(&board), 0.0);
    }

    #[test]
    fn lone_block_makes_everything_below_a_hole() {
        let mut board = Board::new();
        board.set(0, 5, true);

        // 14 empty cells sit beneath the block in column 0.
        assert_eq!(holes(&board), (BOARD_HEIGHT - 1 - 5) as u32);
        assert_eq!(column_heights(&board)[0], 15);
        assert_eq!(aggregate_height(&board), 15);
        // Column 0 is 15 high, column 1 is 0.
        assert_eq!(bumpiness(&board), 15);
    }

    #[test]
    fn covered_gap_counts_once_per_empty_cell() {
        let mut board = Board::new();
        board.set(3, 19, true);
        board.set(3, 17, true);
        board.set(3, 15, true);

        // Cells at y=16 and y=18 are holes; y=19 is occupied.
        assert_eq!(holes(&board), 2);
    }

    #[test]
    fn complete_lines_counts_full_rows() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, true);
            board.set(x, 18, true);
        }
        board.set(0, 17, true);
        assert_eq!(complete_lines(&board), 2);
    }

    #[test]
    fn flat_surface_beats_uneven_surface() {
        let mut flat = Board::new();
        let mut spiky = Board::new();
        // Four cells flat on the floor vs. a four-cell tower.
        for x in 0..4 {
            flat.set(x, 19, true);
        }
        for y in 16..20 {
            spiky.set(0, y, true);
        }
        assert!(evaluate(&flat) > evaluate(&spiky));
    }
}
