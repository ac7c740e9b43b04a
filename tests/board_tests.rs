//! Board tests - placement validation, merging, and row compaction

use tetris_bot::core::{base_shape, Board};
use tetris_bot::types::{BOARD_HEIGHT, BOARD_WIDTH, PieceKind};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.occupied(x, y), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn placement_rejects_out_of_bounds_columns_and_floor() {
    let board = Board::new();
    let flat_i = base_shape(PieceKind::I);

    // Off the left edge.
    assert!(!board.is_valid_placement(&flat_i, -1, 0));
    // Off the right edge: last cell would land at column 10.
    assert!(!board.is_valid_placement(&flat_i, 7, 0));
    assert!(board.is_valid_placement(&flat_i, 6, 0));
    // Below the floor.
    assert!(!board.is_valid_placement(&flat_i, 0, BOARD_HEIGHT as i8));
    assert!(board.is_valid_placement(&flat_i, 0, BOARD_HEIGHT as i8 - 1));
}

#[test]
fn placement_allows_rows_above_the_board() {
    let board = Board::new();
    let vertical_i = base_shape(PieceKind::I).rotate_cw();

    // Three of four cells above the visible board.
    assert!(board.is_valid_placement(&vertical_i, 0, -3));
    // Entirely above is still fine; only columns are constrained.
    assert!(board.is_valid_placement(&vertical_i, 0, -4));
}

#[test]
fn placement_rejects_overlap_only_on_visible_rows() {
    let mut board = Board::new();
    board.set(4, 1, true);

    let o = base_shape(PieceKind::O);
    // O at (4, 0) covers (4..6, 0..2) and hits the occupied cell.
    assert!(!board.is_valid_placement(&o, 4, 0));
    // Shifted up one row its bottom half covers only row 0, which is free.
    assert!(board.is_valid_placement(&o, 4, -1));

    board.set(4, 0, true);
    assert!(!board.is_valid_placement(&o, 4, -1));
    assert!(board.is_valid_placement(&o, 5, -1));
}

#[test]
fn merge_is_unconditional_and_clips_top() {
    let mut board = Board::new();
    board.set(0, 0, true);

    let vertical_i = base_shape(PieceKind::I).rotate_cw();
    // Overlaps the existing cell and extends above the board; merge anyway.
    board.merge(&vertical_i, 0, -2);

    assert!(board.occupied(0, 0));
    assert!(board.occupied(0, 1));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 2);
}

#[test]
fn single_full_row_clears_and_shifts_down() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, true);
    }
    // A marker two rows up, and a cell directly above the cleared row.
    board.set(3, 18, true);
    board.set(7, 17, true);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0], 19);

    // Everything above slid down one row; the top row is empty.
    assert!(board.occupied(3, 19));
    assert!(board.occupied(7, 18));
    assert!(!board.occupied(3, 18));
    for x in 0..BOARD_WIDTH as i8 {
        assert!(!board.occupied(x, 0));
    }
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 2);
}

#[test]
fn separated_full_rows_clear_together_in_one_pass() {
    let mut board = Board::new();
    // Rows 19 and 17 full, row 18 holds a single survivor.
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, true);
        board.set(x, 17, true);
    }
    board.set(2, 18, true);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[17, 19]);

    // The survivor compacts to the bottom.
    assert!(board.occupied(2, 19));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 1);
}

#[test]
fn four_full_rows_clear_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, true);
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
    assert!(board.cells().iter().all(|&c| !c));
}

#[test]
fn incomplete_row_is_not_cleared() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, true);
    }
    assert!(board.clear_full_rows().is_empty());
    assert!(board.occupied(0, 19));
}
