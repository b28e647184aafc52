//! Immediate-execution calculator state machine
//!
//! Operations are evaluated left to right as operator keys arrive, the way a
//! pocket calculator does it. Everything the model shows fits in
//! `max_items` characters.

use tracing::{debug, warn};

use super::{CalcError, Operation};
use crate::view::KeyCode;

/// Smallest display capacity the model can work with
pub const MIN_DISPLAY_ITEMS: usize = 6;

/// Text shown while the model is in the error state
pub const ERROR_TEXT: &str = "Error";

/// Key-driven calculator state
#[derive(Debug, Clone)]
pub struct CalculatorModel {
    /// Display capacity in characters
    max_items: usize,
    /// Text of the number being entered or the last result
    entry: String,
    /// Left operand of the pending operation
    accumulator: Option<f64>,
    /// Operation waiting for its right operand
    pending: Option<Operation>,
    /// Operation and right operand repeated by a second `=`
    repeat: Option<(Operation, f64)>,
    /// Entry shows a result; the next digit starts a new number
    fresh: bool,
    /// Set after a failed calculation until cleared
    error: Option<CalcError>,
}

impl CalculatorModel {
    /// Creates a model for a display of `max_items` characters
    #[must_use]
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            entry: "0".to_string(),
            accumulator: None,
            pending: None,
            repeat: None,
            fresh: false,
            error: None,
        }
    }

    /// Display capacity the model formats for
    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Text the display should show
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.error.is_some() {
            ERROR_TEXT
        } else {
            &self.entry
        }
    }

    /// Numeric value of the shown entry
    #[must_use]
    pub fn value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    /// Operation waiting for its right operand
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// The error that put the model into the error state
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Resets to the initial state
    pub fn reset(&mut self) {
        *self = Self::new(self.max_items);
    }

    /// Applies one key press
    pub fn apply(&mut self, code: KeyCode) {
        if let Some(err) = &self.error {
            let recovers = code == KeyCode::Clear || code.is_digit() || code == KeyCode::DecimalPoint;
            if !recovers {
                debug!(%code, error = %err, "key ignored in error state");
                return;
            }
            self.reset();
        }

        match code {
            KeyCode::Clear => self.reset(),
            KeyCode::DecimalPoint => self.push_decimal_point(),
            KeyCode::Negate => self.negate(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Equals => self.equals(),
            KeyCode::Plus => self.set_operation(Operation::Add),
            KeyCode::Minus => self.set_operation(Operation::Subtract),
            KeyCode::Multiply => self.set_operation(Operation::Multiply),
            KeyCode::Divide => self.set_operation(Operation::Divide),
            digit => self.push_digit(digit.digit().unwrap_or(0)),
        }
        debug!(%code, text = self.display_text(), pending = ?self.pending, "key applied");
    }

    fn entry_len(&self) -> usize {
        self.entry.chars().count()
    }

    fn push_digit(&mut self, d: u8) {
        let ch = char::from(b'0' + d);
        if self.fresh {
            self.entry = ch.to_string();
            self.fresh = false;
        } else if self.entry == "0" {
            self.entry = ch.to_string();
        } else if self.entry_len() < self.max_items {
            self.entry.push(ch);
        } else {
            debug!(max_items = self.max_items, "entry full, digit dropped");
        }
    }

    fn push_decimal_point(&mut self) {
        if self.fresh {
            self.entry = "0.".to_string();
            self.fresh = false;
        } else if !self.entry.contains('.') && self.entry_len() < self.max_items {
            self.entry.push('.');
        }
    }

    fn negate(&mut self) {
        if self.value() == 0.0 {
            return;
        }
        if let Some(positive) = self.entry.strip_prefix('-') {
            self.entry = positive.to_string();
        } else if self.entry_len() < self.max_items {
            self.entry.insert(0, '-');
        }
    }

    fn backspace(&mut self) {
        if self.fresh {
            return;
        }
        self.entry.pop();
        if matches!(self.entry.as_str(), "" | "-" | "-0") {
            self.entry = "0".to_string();
        }
    }

    fn set_operation(&mut self, op: Operation) {
        match (self.pending, self.accumulator) {
            (Some(pending), Some(acc)) if !self.fresh => {
                self.compute(pending, acc, self.value());
                if self.error.is_some() {
                    return;
                }
            }
            (None, _) | (_, None) => self.accumulator = Some(self.value()),
            // operator pressed twice: only swap it
            (Some(_), Some(_)) => {}
        }
        self.pending = Some(op);
        self.repeat = None;
        self.fresh = true;
    }

    fn equals(&mut self) {
        if let (Some(op), Some(acc)) = (self.pending.take(), self.accumulator) {
            let rhs = self.value();
            self.repeat = Some((op, rhs));
            self.compute(op, acc, rhs);
        } else if let Some((op, rhs)) = self.repeat {
            self.compute(op, self.value(), rhs);
        } else {
            self.show(self.value());
        }
    }

    fn compute(&mut self, op: Operation, lhs: f64, rhs: f64) {
        match op.apply(lhs, rhs) {
            Ok(value) => self.show(value),
            Err(err) => self.fail(err),
        }
    }

    fn show(&mut self, value: f64) {
        match format_for_display(value, self.max_items) {
            Some(text) => {
                self.entry = text;
                self.accumulator = Some(self.value());
                self.fresh = true;
            }
            None => self.fail(CalcError::Overflow),
        }
    }

    fn fail(&mut self, err: CalcError) {
        warn!(error = %err, "calculation failed");
        self.error = Some(err);
        self.pending = None;
        self.accumulator = None;
        self.repeat = None;
        self.fresh = true;
    }
}

/// Formats `value` in at most `max_items` characters.
///
/// Plain notation with as many decimals as fit is preferred; exponent
/// notation is used when plain does not fit or keeps fewer significant
/// digits. Returns `None` for non-finite values and values that do not fit
/// at all. A non-zero value is never shown as `0`.
#[must_use]
pub fn format_for_display(value: f64, max_items: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    // -0.0 shows as 0
    let value = if value == 0.0 { 0.0 } else { value };

    let plain = plain_notation(value, max_items);
    let exponent = exponent_notation(value, max_items);
    match (plain, exponent) {
        (Some(plain), Some(exp)) if significant_digits(&exp) > significant_digits(&plain) => {
            Some(exp)
        }
        (Some(plain), _) => Some(plain),
        (None, exp) => exp,
    }
}

fn plain_notation(value: f64, max_items: usize) -> Option<String> {
    (0..=max_items).rev().find_map(|precision| {
        let text = trim_fraction(&format!("{value:.precision$}"));
        let shows_zero = text.parse::<f64>().map_or(true, |v| v == 0.0);
        (text.chars().count() <= max_items && (value == 0.0 || !shows_zero)).then_some(text)
    })
}

fn exponent_notation(value: f64, max_items: usize) -> Option<String> {
    (0..=max_items).rev().find_map(|precision| {
        let formatted = format!("{value:.precision$e}");
        let text = match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
            None => formatted,
        };
        (text.chars().count() <= max_items).then_some(text)
    })
}

/// Digits of the mantissa after leading zeros
fn significant_digits(text: &str) -> usize {
    let mantissa = text.split_once('e').map_or(text, |(m, _)| m);
    mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count()
}

/// Drops trailing zeros (and a dangling point) from a decimal fraction
fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
