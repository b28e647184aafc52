//! Calculator model: arithmetic and the key-driven state machine
//!
//! The model never talks to the view. It consumes [`crate::view::KeyCode`]s
//! and produces the text the display should show, already fitted to the
//! display's capacity.

mod model;
mod operations;

pub use model::{format_for_display, CalculatorModel, ERROR_TEXT, MIN_DISPLAY_ITEMS};
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity, or too large to show)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}
