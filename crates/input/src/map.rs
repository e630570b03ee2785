//! Key mapping from terminal events to board actions.

use crate::types::BoardAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to board actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BoardAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(BoardAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(BoardAction::CursorRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(BoardAction::CursorUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(BoardAction::CursorDown),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(BoardAction::Select),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => Some(BoardAction::Hint),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BoardAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
