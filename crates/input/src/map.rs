//! Key bindings: terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key event to a game action.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H') | KeyCode::Char('a' | 'A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L') | KeyCode::Char('d' | 'D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j' | 'J') | KeyCode::Char('s' | 'S') => {
            Some(GameAction::SoftDrop)
        }

        KeyCode::Up | KeyCode::Char('k' | 'K') | KeyCode::Char('w' | 'W') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z' | 'Z') => Some(GameAction::RotateCcw),

        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p' | 'P') => Some(GameAction::Pause),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Whether the key should exit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
