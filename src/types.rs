//! Shared types and constants.
//!
//! Pure data with no dependencies, usable from the core simulation, the bot,
//! and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing and Scoring
//!
//! Gravity starts at 1000ms per row and speeds up by 100ms per level, with a
//! 100ms floor. Clearing `n` lines at once scores `n² × 100` points, and the
//! level is `score / 1000 + 1`.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity speed-up per level beyond the first
pub const FALL_STEP_MS: u32 = 100;

/// Fastest allowed gravity interval
pub const MIN_FALL_MS: u32 = 100;

/// Points for clearing `n` lines in one lock: `n * n * LINE_SCORE_BASE`
pub const LINE_SCORE_BASE: u32 = 100;

/// Score needed per level step: `level = score / LEVEL_SCORE_STEP + 1`
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Delay between bot placements, so moves stay watchable
pub const BOT_MOVE_MS: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed base cell matrix (see [`crate::core::pieces`]) and a
/// display color assigned by the terminal view:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order. Spawn draws index this uniformly.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Single-letter name for status displays
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Game actions that can be applied to the active piece
///
/// Both human input and the bot driver speak this vocabulary. Every action
/// maps 1:1 to a validated board/piece operation; an invalid request is a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop piece one cell down
    SoftDrop,
    /// Instantly drop piece to its resting row and lock it
    HardDrop,
}
