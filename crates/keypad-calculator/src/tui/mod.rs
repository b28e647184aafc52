//! Terminal frontend
//!
//! A ratatui rendering of the display and keypad views. Keyboard and mouse
//! input both end up as [`KeyCode`](crate::view::KeyCode) presses on the
//! same controller.

mod app;
mod display;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, IDLE_POLL};
pub use display::DisplayWidget;
pub use input::{InputAction, InputHandler};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{render, CalculatorUI, HELP_LINE, TITLE};
