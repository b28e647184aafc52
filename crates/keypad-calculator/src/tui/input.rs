//! Keyboard input handling
//!
//! Maps terminal key events onto keypad [`KeyCode`]s so typing and clicking
//! go through the same controller path.

use crossterm::event::{KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::KeyCode;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Press a keypad key
    Key(KeyCode),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return InputAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                TermKey::Char('c' | 'q') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match code {
            TermKey::Char('q' | 'Q') => InputAction::Quit,
            TermKey::Char(c) => KeyCode::from_keyboard(c).map_or(InputAction::None, InputAction::Key),
            TermKey::Enter => InputAction::Key(KeyCode::Equals),
            TermKey::Backspace => InputAction::Key(KeyCode::Backspace),
            TermKey::Esc | TermKey::Delete => InputAction::Key(KeyCode::Clear),
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: TermKey) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: TermKey) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_input_handler_debug() {
        let handler = InputHandler::new();
        assert!(format!("{:?}", handler).contains("InputHandler"));
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key_event(TermKey::Char(c))),
                InputAction::Key(KeyCode::from_digit(d).unwrap())
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', KeyCode::Plus),
            ('-', KeyCode::Minus),
            ('*', KeyCode::Multiply),
            ('/', KeyCode::Divide),
            ('=', KeyCode::Equals),
            ('.', KeyCode::DecimalPoint),
        ];
        for (c, expected) in cases {
            assert_eq!(
                handler.handle_key(key_event(TermKey::Char(c))),
                InputAction::Key(expected)
            );
        }
    }

    #[test]
    fn test_handle_unmapped_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(TermKey::Char('('))),
            InputAction::None
        );
    }

    // ===== Special key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(TermKey::Enter)),
            InputAction::Key(KeyCode::Equals)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(TermKey::Backspace)),
            InputAction::Key(KeyCode::Backspace)
        );
    }

    #[test]
    fn test_handle_escape_and_delete() {
        let handler = InputHandler::new();
        for key in [TermKey::Esc, TermKey::Delete] {
            assert_eq!(
                handler.handle_key(key_event(key)),
                InputAction::Key(KeyCode::Clear)
            );
        }
    }

    #[test]
    fn test_handle_unmapped_special() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(TermKey::Tab)), InputAction::None);
        assert_eq!(handler.handle_key(key_event(TermKey::Up)), InputAction::None);
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(TermKey::Char('q'))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(TermKey::Char('c'))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(TermKey::Char('q'))),
            InputAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_other() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(TermKey::Char('1'))),
            InputAction::None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind_and_state(
            TermKey::Char('1'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key(event), InputAction::None);
    }
}
