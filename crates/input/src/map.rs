//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Key releases are ignored so terminals that report them do not type twice.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Editing
        KeyCode::Char('u') | KeyCode::Char('U') if ctrl => Some(GameAction::ClearInput),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(GameAction::Type(c)),
        KeyCode::Backspace => Some(GameAction::Backspace),

        // Suggestions
        KeyCode::Down => Some(GameAction::FocusNext),
        KeyCode::Up => Some(GameAction::FocusPrev),
        KeyCode::Enter => Some(GameAction::Accept),

        // Round
        KeyCode::Tab => Some(GameAction::Skip),
        KeyCode::F(2) => Some(GameAction::ToggleExtended),
        KeyCode::F(3) => Some(GameAction::ToggleHistory),
        KeyCode::Esc => Some(GameAction::Back),

        _ => None,
    }
}

/// Check if key should quit the game immediately.
///
/// Letters are guess input, so only Ctrl+C quits.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_printable_keys_type() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::Type('a'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(GameAction::Type('A'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Type(' '))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('é'))),
            Some(GameAction::Type('é'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(GameAction::Backspace)
        );
    }

    #[test]
    fn test_suggestion_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::FocusNext)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::FocusPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Accept)
        );
    }

    #[test]
    fn test_round_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(GameAction::Skip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(2))),
            Some(GameAction::ToggleExtended)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(3))),
            Some(GameAction::ToggleHistory)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Back)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::F(9))), None);
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(GameAction::ClearInput)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }
}
