//! Game state module - ties together board, pieces, RNG, and scoring.
//!
//! Handles gravity timing, action dispatch, piece locking, line clears, and
//! the game-over latch. Everything runs synchronously inside one tick; there
//! are no recoverable errors, only validated no-ops.

use crate::core::board::Board;
use crate::core::piece::{project_drop, Piece};
use crate::core::rng::SimpleRng;
use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, GameAction, LEVEL_SCORE_STEP, LINE_SCORE_BASE, MIN_FALL_MS,
    PieceKind,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next_kind: PieceKind,
    rng: SimpleRng,
    score: u32,
    level: u32,
    fall_interval_ms: u32,
    /// Elapsed time since the active piece last descended.
    fall_timer_ms: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// Draws the active and next pieces immediately; the same seed always
    /// produces the same piece sequence.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(rng.draw_kind());
        let next_kind = rng.draw_kind();

        Self {
            board: Board::new(),
            active: Some(active),
            next_kind,
            rng,
            score: 0,
            level: 1,
            fall_interval_ms: BASE_FALL_MS,
            fall_timer_ms: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (test setup and scripted scenarios)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The row where the active piece would rest if hard-dropped now.
    ///
    /// Display-only; the ghost is never merged into the board.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(project_drop(&self.board, &active))
    }

    /// Apply a player or bot action.
    ///
    /// Returns true if the action changed state. Invalid requests are
    /// silently ignored, and nothing mutates once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveLeft => piece.try_move(&self.board, -1, 0),
            GameAction::MoveRight => piece.try_move(&self.board, 1, 0),
            GameAction::SoftDrop => piece.try_move(&self.board, 0, 1),
            GameAction::RotateCw => piece.try_rotate_cw(&self.board),
            GameAction::HardDrop => {
                piece.y = project_drop(&self.board, piece);
                self.lock_active();
                true
            }
        }
    }

    /// Advance game time. Gravity moves the active piece down one row once
    /// the accumulated time exceeds the current fall interval; a piece that
    /// cannot descend locks instead.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over || self.active.is_none() {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval_ms {
            return;
        }
        self.fall_timer_ms = 0;

        let descended = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.board, 0, 1),
            None => return,
        };
        if !descended {
            self.lock_active();
        }
    }

    /// Merge the active piece into the board, clear lines, update scoring,
    /// and spawn the next piece.
    ///
    /// The merge is unconditional; callers must have stopped descent at a
    /// valid resting position. If the fresh spawn is already invalid the game
    /// ends, after which all further actions and ticks are no-ops.
    pub fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece.shape, piece.x, piece.y);
        let cleared = self.board.clear_full_rows();
        self.apply_scoring(cleared.len() as u32);

        let spawned = Piece::spawn(self.next_kind);
        self.next_kind = self.rng.draw_kind();
        if !spawned.is_valid(&self.board) {
            self.game_over = true;
        }
        self.active = Some(spawned);
        self.fall_timer_ms = 0;
    }

    /// Recompute score, level, and fall interval after a clear.
    ///
    /// `score += lines² × 100` rewards simultaneous multi-line clears
    /// superlinearly (a quad scores 1600, four singles score 400).
    fn apply_scoring(&mut self, lines_cleared: u32) {
        if lines_cleared == 0 {
            return;
        }
        self.score += lines_cleared * lines_cleared * LINE_SCORE_BASE;
        self.level = self.score / LEVEL_SCORE_STEP + 1;
        self.fall_interval_ms =
            MIN_FALL_MS.max(BASE_FALL_MS.saturating_sub((self.level - 1) * FALL_STEP_MS));
    }
}
