//! Core simulation - pure, deterministic, and testable.
//!
//! All game rules live here with zero dependencies on terminal I/O:
//!
//! - [`board`]: 10x20 occupancy grid with placement validation and row
//!   compaction
//! - [`pieces`]: the immutable shape catalog and the clockwise rotation
//!   transform
//! - [`piece`]: the active piece instance and drop projection
//! - [`game_state`]: gravity timing, action dispatch, scoring, game over
//! - [`rng`]: seedable generator for reproducible piece sequences

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;

pub use board::Board;
pub use game_state::GameState;
pub use piece::{project_drop, Piece};
pub use pieces::{base_shape, Shape};
pub use rng::SimpleRng;
