//! View contracts used by the controller to drive the calculator GUI
//!
//! These traits keep the controller and model independent of any widget
//! toolkit. [`crate::keypad`] and [`crate::display`] provide in-memory
//! implementations; [`crate::tui`] renders them in a terminal.

mod keycode;
mod variable;

pub use keycode::KeyCode;
pub use variable::TextVariable;

use thiserror::Error;

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Contract violations between the controller and the view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A string outside the fixed key set was used as a key code
    #[error("Invalid key code: '{0}'")]
    InvalidKeyCode(String),

    /// No key with this code is registered on the keypad
    #[error("No key registered for '{0}'")]
    KeyNotFound(KeyCode),

    /// Text does not fit on the display
    #[error("Display overflow: {len} items exceed capacity of {max_items}")]
    DisplayOverflow {
        /// Length of the rejected text in characters
        len: usize,
        /// Display capacity
        max_items: usize,
    },

    /// The display cannot hold everything the calculator may show
    #[error("Display too small: capacity {max_items} is below the minimum of {min_items}")]
    DisplayTooSmall {
        /// Display capacity
        max_items: usize,
        /// Smallest capacity the calculator supports
        min_items: usize,
    },
}

/// The numeric/result readout
pub trait DisplayView {
    /// The bound value cell the rendering widget reads from.
    ///
    /// Writing through it and calling [`DisplayView::update`] must stay
    /// consistent: both are visible through [`DisplayView::text`].
    fn variable(&self) -> &TextVariable;

    /// Replaces the shown text
    fn update(&mut self, text: &str) -> ViewResult<()>;

    /// Maximal number of items the display can show
    fn max_items(&self) -> usize;

    /// Currently shown text
    fn text(&self) -> String {
        self.variable().get()
    }
}

/// A single pressable keypad button
pub trait Key {
    /// Code of this key, stable for the key's lifetime
    fn code(&self) -> KeyCode;

    /// Switches the button to its 'pressed' appearance. Idempotent.
    fn press(&mut self);

    /// Switches the button back to 'not pressed'. Idempotent.
    fn release(&mut self);

    /// Whether the button currently looks pressed
    fn is_pressed(&self) -> bool;
}

/// The container of all keypad buttons
pub trait KeypadView {
    /// Concrete button type held by this keypad
    type Key: Key;

    /// Adds a button, replacing and returning any button already registered
    /// under the same code
    fn register(&mut self, key: Self::Key) -> Option<Self::Key>;

    /// Switches the button identified by `code` into the 'pressed' state
    fn press(&mut self, code: KeyCode) -> ViewResult<()>;

    /// Switches all registered buttons into the 'not pressed' state
    fn release_all(&mut self);

    /// Looks up a registered button
    fn key(&self, code: KeyCode) -> Option<&Self::Key>;

    /// Codes of all buttons currently pressed, in registration order
    fn pressed_codes(&self) -> Vec<KeyCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_display() {
        assert_eq!(
            ViewError::KeyNotFound(KeyCode::Equals).to_string(),
            "No key registered for '='"
        );
        assert_eq!(
            ViewError::DisplayOverflow {
                len: 9,
                max_items: 8
            }
            .to_string(),
            "Display overflow: 9 items exceed capacity of 8"
        );
        assert_eq!(
            ViewError::DisplayTooSmall {
                max_items: 4,
                min_items: 6
            }
            .to_string(),
            "Display too small: capacity 4 is below the minimum of 6"
        );
    }

    #[test]
    fn test_view_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(ViewError::KeyNotFound(KeyCode::Zero));
        assert!(err.to_string().contains("No key"));
    }

    struct FixedDisplay {
        var: TextVariable,
    }

    impl DisplayView for FixedDisplay {
        fn variable(&self) -> &TextVariable {
            &self.var
        }

        fn update(&mut self, text: &str) -> ViewResult<()> {
            self.var.set(text);
            Ok(())
        }

        fn max_items(&self) -> usize {
            4
        }
    }

    #[test]
    fn test_default_text_reads_variable() {
        let mut display = FixedDisplay {
            var: TextVariable::new(),
        };
        display.update("12").unwrap();
        assert_eq!(display.text(), "12");

        display.variable().set("34");
        assert_eq!(display.text(), "34");
    }
}
