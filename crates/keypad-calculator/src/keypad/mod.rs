//! Keypad buttons and the container that dispatches presses to them
//!
//! This module provides the in-memory [`Key`] and [`KeypadView`]
//! implementations. The keypad can be:
//! - Driven by the controller (one key highlighted per input)
//! - Rendered by any frontend reading the pressed state
//! - Reset in one call after a highlight pulse

mod layout;

pub use layout::KeypadLayout;

use tracing::{debug, warn};

use crate::view::{Key, KeyCode, KeypadView, ViewError, ViewResult};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyButton {
    code: KeyCode,
    pressed: bool,
}

impl KeyButton {
    /// Creates a released button
    #[must_use]
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            pressed: false,
        }
    }

    /// The label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.code.label()
    }
}

impl Key for KeyButton {
    fn code(&self) -> KeyCode {
        self.code
    }

    fn press(&mut self) {
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Keypad owning at most one button per [`KeyCode`]
#[derive(Debug, Clone)]
pub struct Keypad<K: Key = KeyButton> {
    /// Buttons in registration order
    keys: Vec<K>,
}

impl<K: Key> Default for Keypad<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad<KeyButton> {
    /// Creates a keypad with one button per cell of the standard layout
    #[must_use]
    pub fn standard() -> Self {
        Self::from_layout(&KeypadLayout::standard())
    }

    /// Creates a keypad with one button per occupied cell of `layout`
    #[must_use]
    pub fn from_layout(layout: &KeypadLayout) -> Self {
        let mut keypad = Self::new();
        for code in layout.codes() {
            keypad.register(KeyButton::new(code));
        }
        keypad
    }
}

impl<K: Key> Keypad<K> {
    /// Creates an empty keypad
    #[must_use]
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Returns the number of registered buttons
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over buttons in registration order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Whether the button for `code` is pressed (`false` if unregistered)
    #[must_use]
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.key(code).is_some_and(Key::is_pressed)
    }

    /// Releases a single button
    pub fn release(&mut self, code: KeyCode) -> ViewResult<()> {
        self.key_mut(code)
            .map(Key::release)
            .ok_or(ViewError::KeyNotFound(code))
    }

    fn index_of(&self, code: KeyCode) -> Option<usize> {
        self.keys.iter().position(|k| k.code() == code)
    }

    fn key_mut(&mut self, code: KeyCode) -> Option<&mut K> {
        self.keys.iter_mut().find(|k| k.code() == code)
    }
}

impl<K: Key> KeypadView for Keypad<K> {
    type Key = K;

    fn register(&mut self, key: K) -> Option<K> {
        let code = key.code();
        if let Some(idx) = self.index_of(code) {
            debug!(%code, "replacing registered key");
            Some(std::mem::replace(&mut self.keys[idx], key))
        } else {
            debug!(%code, "registering key");
            self.keys.push(key);
            None
        }
    }

    fn press(&mut self, code: KeyCode) -> ViewResult<()> {
        match self.key_mut(code) {
            Some(key) => {
                key.press();
                Ok(())
            }
            None => {
                warn!(%code, "press on unregistered key");
                Err(ViewError::KeyNotFound(code))
            }
        }
    }

    fn release_all(&mut self) {
        for key in &mut self.keys {
            key.release();
        }
    }

    fn key(&self, code: KeyCode) -> Option<&K> {
        self.keys.iter().find(|k| k.code() == code)
    }

    fn pressed_codes(&self) -> Vec<KeyCode> {
        self.keys
            .iter()
            .filter(|k| k.is_pressed())
            .map(Key::code)
            .collect()
    }
}
