//! Terminal falling-block puzzle with a heuristic autopilot.
//!
//! The crate splits into a pure, deterministic [`core`] (board, pieces,
//! gravity, scoring), an automated player in [`bot`] (four-feature heuristic
//! and exhaustive placement search), and thin presentation glue in [`term`]
//! and [`input`]. The core never touches I/O; the bot only reads the board
//! and issues the same validated actions a human player would.

pub mod bot;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
