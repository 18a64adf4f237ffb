use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Action;

pub mod keys {
    pub const QUIT: &str = "q";
    pub const NAMES: &str = "n";
    pub const ICONS: &str = "i";
    pub const REFRESH: &str = "r";
}

pub fn handle_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('n') => Action::ToggleName,
        KeyCode::Char('i') => Action::ToggleIcon,
        KeyCode::Char('r') => Action::Refresh,
        _ => Action::None,
    }
}
