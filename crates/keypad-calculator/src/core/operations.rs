//! Arithmetic behind the operator keys

use crate::core::{CalcError, CalcResult};
use crate::view::KeyCode;

/// The four keypad operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// Returns the operator symbol as printed on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.key().as_str()
    }

    /// Returns the key that triggers this operation
    #[must_use]
    pub const fn key(&self) -> KeyCode {
        match self {
            Self::Add => KeyCode::Plus,
            Self::Subtract => KeyCode::Minus,
            Self::Multiply => KeyCode::Multiply,
            Self::Divide => KeyCode::Divide,
        }
    }

    /// Applies the operation to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Calculator::add(a, b),
            Self::Subtract => Calculator::subtract(a, b),
            Self::Multiply => Calculator::multiply(a, b),
            Self::Divide => Calculator::divide(a, b),
        }
    }
}

/// Checked floating point arithmetic
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a / b)
    }

    /// Checks for overflow (infinity or NaN)
    fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Operation tests =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operation_key_roundtrip() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.key().operation(), Some(op));
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    // ===== Calculator tests =====

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Calculator::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::divide(0.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Calculator::multiply(f64::MAX, 2.0), Err(CalcError::Overflow));
        assert_eq!(Calculator::add(f64::MAX, f64::MAX), Err(CalcError::Overflow));
        assert_eq!(
            Calculator::subtract(f64::MIN, f64::MAX),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_nan_is_invalid() {
        assert_eq!(
            Calculator::add(f64::INFINITY, f64::NEG_INFINITY),
            Err(CalcError::InvalidResult("NaN".into()))
        );
    }

    #[test]
    fn test_negative_results() {
        assert_eq!(Calculator::multiply(-3.0, 4.0), Ok(-12.0));
        assert_eq!(Calculator::divide(-9.0, 3.0), Ok(-3.0));
    }
}
