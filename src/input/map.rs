//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Tap: flap while running, start/restart otherwise.
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::Flap),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('w'),
            KeyCode::Char('k'),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameAction::Flap),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
