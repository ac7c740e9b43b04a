//! Board module - the fixed 10x20 occupancy grid.
//!
//! Uses a flat boolean array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 left to right and y in 0..19 top to
//! bottom. Cells hold only locked pieces; the active piece is never baked in
//! until it locks.
//!
//! Rows with negative y are above the visible board and always count as
//! unobstructed, which lets pieces spawn partially off the top.

use arrayvec::ArrayVec;

use crate::core::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows of occupancy flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether the cell at (x, y) holds a locked piece.
    ///
    /// Out-of-bounds coordinates read as unoccupied.
    pub fn occupied(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Set occupancy at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check whether a shape placed with its top-left at (x, y) is valid.
    ///
    /// Every filled cell must land in a column inside [0, width) and a row
    /// below height; rows above the board (y < 0) are unobstructed, rows on
    /// the board must be unoccupied.
    pub fn is_valid_placement(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (row, col) in shape.filled_cells() {
            let nx = x + col as i8;
            let ny = y + row as i8;
            if nx < 0 || nx >= BOARD_WIDTH as i8 || ny >= BOARD_HEIGHT as i8 {
                return false;
            }
            if ny >= 0 && self.occupied(nx, ny) {
                return false;
            }
        }
        true
    }

    /// Merge a shape into the occupancy at (x, y), unconditionally.
    ///
    /// Cells above the board (y < 0) are discarded without effect. The caller
    /// is responsible for having stopped descent at a valid resting position.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for (row, col) in shape.filled_cells() {
            let ny = y + row as i8;
            if ny >= 0 {
                self.set(x + col as i8, ny, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Clear all full rows and return their indices (sorted top to bottom).
    ///
    /// Full rows are detected against the pre-clear snapshot, so multi-row
    /// clears from one lock are counted together in a single pass. Surviving
    /// rows compact downward in relative order and the vacated top rows are
    /// zero-filled (two-pointer pass over the fixed buffer, no allocation).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = false;
        }

        // Collected bottom-up; report top to bottom.
        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [false; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
