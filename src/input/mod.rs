//! Keyboard mapping for terminal play.
//!
//! Plain per-keypress mapping with no auto-repeat handling; the terminal's
//! own key repeat drives held movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key event to a game action, if any.
///
/// Arrow keys or WASD: left/right move, up/W rotates clockwise, down/S soft
/// drops. Space hard drops.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCw),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Whether a key event should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
