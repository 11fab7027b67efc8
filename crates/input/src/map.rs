//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a typed character to an action. Letters are case folded.
pub fn map_char(ch: char) -> Option<GameAction> {
    GameAction::from_char(ch)
}

/// Map keyboard input to game actions.
///
/// Raw mode delivers Ctrl+C as an ordinary key, so it is treated as quit.
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameAction::Quit)
        }
        KeyCode::Char(ch) => map_char(ch),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    map_key_event(key) == Some(GameAction::Quit)
}
