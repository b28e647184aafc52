//! TUI application state
//!
//! Owns the controller together with the terminal-specific bits: the keypad
//! layout, the last drawn keypad area for mouse clicks, and the quit flag.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{info, warn};

use super::input::{InputAction, InputHandler};
use super::keypad::hit_test;
use crate::config::CalculatorConfig;
use crate::controller::KeypadController;
use crate::display::TextDisplay;
use crate::keypad::{Keypad, KeypadLayout};
use crate::view::{KeyCode, ViewResult};

/// How long the event loop waits when no highlight is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: KeypadController<TextDisplay, Keypad>,
    layout: KeypadLayout,
    input: InputHandler,
    /// Where the keypad was drawn last frame
    keypad_area: Cell<Option<Rect>>,
    /// Last view error, shown in the status line
    status: Option<String>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates the app with the standard keypad
    pub fn new(config: &CalculatorConfig) -> ViewResult<Self> {
        let layout = KeypadLayout::standard();
        let keypad = Keypad::from_layout(&layout);
        let controller = KeypadController::with_config(config.build_display(), keypad, config)?;
        info!(
            max_items = config.display.max_items,
            overflow = ?config.display.overflow,
            "calculator started"
        );
        Ok(Self {
            controller,
            layout,
            input: InputHandler::new(),
            keypad_area: Cell::new(None),
            status: None,
            should_quit: false,
        })
    }

    /// The controller driving display and keypad
    #[must_use]
    pub fn controller(&self) -> &KeypadController<TextDisplay, Keypad> {
        &self.controller
    }

    /// The keypad layout being drawn
    #[must_use]
    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Last error message, if the last key failed
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records where the keypad was drawn
    pub fn set_keypad_area(&self, area: Rect) {
        self.keypad_area.set(Some(area));
    }

    /// Presses a key through the controller
    pub fn press(&mut self, code: KeyCode, now: Instant) {
        match self.controller.handle_key(code, now) {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!(%code, error = %err, "key press failed");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Handles a keyboard event
    pub fn handle_key_event(&mut self, event: KeyEvent, now: Instant) {
        match self.input.handle_key(event) {
            InputAction::Key(code) => self.press(code, now),
            InputAction::Quit => self.quit(),
            InputAction::None => {}
        }
    }

    /// Handles a mouse event; left clicks on a key press it
    pub fn handle_mouse_event(&mut self, event: MouseEvent, now: Instant) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .keypad_area
            .get()
            .and_then(|area| hit_test(&self.layout, area, event.column, event.row));
        if let Some(code) = hit {
            self.press(code, now);
        }
    }

    /// Dispatches a terminal event
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key_event(*key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(*mouse, now),
            _ => {}
        }
    }

    /// Releases the highlight once due; returns whether a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controller.tick(now)
    }

    /// How long the event loop may block before the next tick
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .pulse_remaining(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DisplayView, KeypadView};
    use crossterm::event::{KeyCode as TermKey, KeyModifiers};

    fn app() -> CalculatorApp {
        CalculatorApp::new(&CalculatorConfig::default()).unwrap()
    }

    fn type_keys(app: &mut CalculatorApp, input: &str, now: Instant) {
        for c in input.chars() {
            app.handle_key_event(KeyEvent::new(TermKey::Char(c), KeyModifiers::NONE), now);
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn display_text(app: &CalculatorApp) -> String {
        app.controller().display().text()
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert_eq!(display_text(&app), "0");
        assert!(!app.should_quit());
        assert!(app.status().is_none());
        assert_eq!(app.layout().dimensions(), (5, 4));
    }

    #[test]
    fn test_typing_calculates() {
        let mut app = app();
        let now = Instant::now();
        type_keys(&mut app, "6*7", now);
        app.handle_key_event(KeyEvent::new(TermKey::Enter, KeyModifiers::NONE), now);
        assert_eq!(display_text(&app), "42");
        assert_eq!(
            app.controller().keypad().pressed_codes(),
            vec![KeyCode::Equals]
        );
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        type_keys(&mut app, "q", Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_presses_key() {
        let mut app = app();
        let now = Instant::now();
        app.set_keypad_area(Rect::new(0, 0, 26, 12));
        // row 1, col 0 is 7
        app.handle_mouse_event(click(3, 3), now);
        assert_eq!(display_text(&app), "7");
        assert_eq!(app.controller().keypad().pressed_codes(), vec![KeyCode::Seven]);
    }

    #[test]
    fn test_click_before_first_draw_ignored() {
        let mut app = app();
        app.handle_mouse_event(click(3, 3), Instant::now());
        assert_eq!(display_text(&app), "0");
    }

    #[test]
    fn test_non_left_click_ignored() {
        let mut app = app();
        app.set_keypad_area(Rect::new(0, 0, 26, 12));
        let mut event = click(3, 3);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse_event(event, Instant::now());
        assert_eq!(display_text(&app), "0");
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(
            &Event::Key(KeyEvent::new(TermKey::Char('9'), KeyModifiers::NONE)),
            now,
        );
        app.handle_event(&Event::Resize(80, 24), now);
        assert_eq!(display_text(&app), "9");
    }

    #[test]
    fn test_tick_and_poll_timeout() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);

        type_keys(&mut app, "1", now);
        assert_eq!(app.poll_timeout(now), Duration::from_millis(150));
        assert!(!app.tick(now));
        assert!(app.tick(now + Duration::from_millis(150)));
        assert!(app.controller().keypad().pressed_codes().is_empty());
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn test_error_surfaces_in_status() {
        let config = CalculatorConfig::default();
        let mut app = CalculatorApp::new(&config).unwrap();
        // a keypad without = cannot be pressed
        let mut keypad = Keypad::new();
        for code in KeyCode::ALL.into_iter().filter(|c| *c != KeyCode::Equals) {
            keypad.register(crate::keypad::KeyButton::new(code));
        }
        app.controller = KeypadController::new(config.build_display(), keypad).unwrap();

        app.press(KeyCode::Equals, Instant::now());
        assert_eq!(app.status(), Some("No key registered for '='"));

        app.press(KeyCode::One, Instant::now());
        assert!(app.status().is_none());
    }
}
