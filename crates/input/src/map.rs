//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// The mapping is context free: `y`/`n` always produce rematch answers and the
/// game state ignores them while a round is in progress.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),

        // Field number entry
        KeyCode::Char(c @ '0'..='9') => Some(GameAction::Digit(c as u8 - b'0')),
        KeyCode::Backspace => Some(GameAction::Backspace),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Submit),

        // Rematch question
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(GameAction::Rematch),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Decline),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
