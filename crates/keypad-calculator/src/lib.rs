//! Keypad Calculator
//!
//! A calculator split into toolkit-independent view contracts and the pieces
//! that drive them:
//!
//! - **view**: [`KeyCode`](view::KeyCode), the observable
//!   [`TextVariable`](view::TextVariable) and the `DisplayView`, `Key` and
//!   `KeypadView` traits a frontend implements
//! - **display** / **keypad**: in-memory implementations of those traits
//! - **core**: the immediate-execution calculator model
//! - **controller**: routes key presses to the model and back to the display
//! - **tui**: a ratatui frontend (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//! use std::time::Instant;
//!
//! let display = TextDisplay::new(12);
//! let keypad = Keypad::standard();
//! let mut controller = KeypadController::new(display, keypad).unwrap();
//!
//! let now = Instant::now();
//! for code in [KeyCode::Six, KeyCode::Multiply, KeyCode::Seven, KeyCode::Equals] {
//!     controller.handle_key(code, now).unwrap();
//! }
//! assert_eq!(controller.display().text(), "42");
//! assert_eq!(controller.keypad().pressed_codes(), vec![KeyCode::Equals]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod display;
pub mod keypad;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, DisplayConfig};
    pub use crate::controller::KeypadController;
    pub use crate::core::{
        format_for_display, CalcError, CalcResult, Calculator, CalculatorModel, Operation,
        ERROR_TEXT,
    };
    pub use crate::display::{OverflowPolicy, TextDisplay};
    pub use crate::keypad::{KeyButton, Keypad, KeypadLayout};
    pub use crate::view::{
        DisplayView, Key, KeyCode, KeypadView, TextVariable, ViewError, ViewResult,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
