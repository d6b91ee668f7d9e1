//! Key mapping from terminal events to app actions.

use crate::types::AppAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to an action. Repeats and releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<AppAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(AppAction::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppAction::Redraw),
        _ => None,
    }
}

/// Check if key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
