//! Key mapping from terminal events to simulation actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation actions.
pub fn action_for_key(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        KeyCode::Char(' ') => Some(SimAction::TogglePause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(SimAction::StepOnce),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SimAction::Clear),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SimAction::NextPattern),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(SimAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(SimAction::SlowDown),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(SimAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the simulation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
