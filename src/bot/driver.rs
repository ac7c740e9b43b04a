//! Bot driver - executes a searched placement as discrete player actions.
//!
//! The driver never teleports the live piece. It replays the placement as a
//! human would: rotate, then step column by column, then soft-drop row by
//! row, then lock. Every step re-validates against the live board, and a
//! blocked step is silently skipped or stops the walk early.

use crate::bot::search::find_best_move;
use crate::core::GameState;
use crate::types::GameAction;

/// Search for the best placement of the active piece and execute it.
///
/// Returns true if a placement was found and the piece locked. When the
/// search finds no candidate at all the piece is hard-dropped where it
/// stands, which locks it and lets the spawn check end the game.
pub fn execute_move(state: &mut GameState) -> bool {
    if state.game_over() {
        return false;
    }
    let Some(active) = state.active() else {
        return false;
    };

    let Some(target) = find_best_move(state.board(), active.kind) else {
        state.apply_action(GameAction::HardDrop);
        return false;
    };

    // Rotations first; a rejected rotation is skipped without retry.
    for _ in 0..target.rotations {
        state.apply_action(GameAction::RotateCw);
    }

    // Walk toward the target column one validated step at a time, stopping
    // early if blocked.
    loop {
        let Some(piece) = state.active() else {
            return false;
        };
        let step = if piece.x < target.column {
            GameAction::MoveRight
        } else if piece.x > target.column {
            GameAction::MoveLeft
        } else {
            break;
        };
        if !state.apply_action(step) {
            break;
        }
    }

    // Descend until no further row validates, then lock.
    while state.apply_action(GameAction::SoftDrop) {}
    state.lock_active();
    true
}
