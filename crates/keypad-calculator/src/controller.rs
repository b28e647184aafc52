//! Wires key presses to the model and the view
//!
//! The controller is generic over the view traits, so the same logic drives
//! the in-memory views in tests and the terminal frontend.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::config::CalculatorConfig;
use crate::core::{CalculatorModel, MIN_DISPLAY_ITEMS};
use crate::view::{DisplayView, KeyCode, KeypadView, ViewError, ViewResult};

/// Default length of the keypad highlight pulse
pub const DEFAULT_HIGHLIGHT: Duration = Duration::from_millis(150);

/// Keypad controller
#[derive(Debug)]
pub struct KeypadController<D, P> {
    display: D,
    keypad: P,
    model: CalculatorModel,
    highlight: Duration,
    /// When the currently highlighted key should be released
    release_at: Option<Instant>,
}

impl<D: DisplayView, P: KeypadView> KeypadController<D, P> {
    /// Creates a controller and shows the model's initial text
    pub fn new(display: D, keypad: P) -> ViewResult<Self> {
        Self::with_highlight(display, keypad, DEFAULT_HIGHLIGHT)
    }

    /// Creates a controller using the highlight pulse from `config`
    pub fn with_config(display: D, keypad: P, config: &CalculatorConfig) -> ViewResult<Self> {
        Self::with_highlight(display, keypad, config.highlight())
    }

    fn with_highlight(display: D, keypad: P, highlight: Duration) -> ViewResult<Self> {
        let max_items = display.max_items();
        if max_items < MIN_DISPLAY_ITEMS {
            warn!(max_items, min_items = MIN_DISPLAY_ITEMS, "display too small");
            return Err(ViewError::DisplayTooSmall {
                max_items,
                min_items: MIN_DISPLAY_ITEMS,
            });
        }
        let model = CalculatorModel::new(max_items);
        let mut controller = Self {
            display,
            keypad,
            model,
            highlight,
            release_at: None,
        };
        controller.refresh_display()?;
        Ok(controller)
    }

    /// Handles a logical key press at time `now`.
    ///
    /// The key is highlighted on the keypad, applied to the model, and the
    /// display is refreshed. If the keypad has no such key the call fails
    /// before anything changes, including the current highlight.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> ViewResult<()> {
        if self.keypad.key(code).is_none() {
            warn!(%code, "press on unregistered key");
            return Err(ViewError::KeyNotFound(code));
        }
        self.keypad.release_all();
        self.keypad.press(code)?;
        self.release_at = Some(now + self.highlight);

        self.model.apply(code);
        debug!(%code, text = self.model.display_text(), "key handled");
        self.refresh_display()
    }

    /// Handles a typed character, returns `Ok(false)` if it maps to no key
    pub fn handle_char(&mut self, ch: char, now: Instant) -> ViewResult<bool> {
        match KeyCode::from_keyboard(ch) {
            Some(code) => self.handle_key(code, now).map(|()| true),
            None => {
                trace!(?ch, "character ignored");
                Ok(false)
            }
        }
    }

    /// Releases the highlighted key once its pulse has elapsed.
    ///
    /// Returns `true` if the keypad changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.release_at {
            Some(deadline) if now >= deadline => {
                self.keypad.release_all();
                self.release_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the highlight pulse ends
    #[must_use]
    pub fn pulse_remaining(&self, now: Instant) -> Option<Duration> {
        self.release_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Pushes the model's text to the display
    fn refresh_display(&mut self) -> ViewResult<()> {
        self.display.update(self.model.display_text())
    }

    /// The display being driven
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The keypad being driven
    #[must_use]
    pub fn keypad(&self) -> &P {
        &self.keypad
    }

    /// The calculator state
    #[must_use]
    pub fn model(&self) -> &CalculatorModel {
        &self.model
    }

    /// Highlight pulse length
    #[must_use]
    pub fn highlight(&self) -> Duration {
        self.highlight
    }
}
