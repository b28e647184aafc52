//! Keypad key identifiers
//!
//! Every key on the keypad is named by a [`KeyCode`]. The label printed on the
//! button and the identifier used by the controller are the same string, so
//! there is exactly one way to spell each key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ViewError, ViewResult};
use crate::core::Operation;

/// IDs and labels of all calculator keypad keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Digit 1
    #[serde(rename = "1")]
    One,
    /// Digit 2
    #[serde(rename = "2")]
    Two,
    /// Digit 3
    #[serde(rename = "3")]
    Three,
    /// Digit 4
    #[serde(rename = "4")]
    Four,
    /// Digit 5
    #[serde(rename = "5")]
    Five,
    /// Digit 6
    #[serde(rename = "6")]
    Six,
    /// Digit 7
    #[serde(rename = "7")]
    Seven,
    /// Digit 8
    #[serde(rename = "8")]
    Eight,
    /// Digit 9
    #[serde(rename = "9")]
    Nine,
    /// Digit 0
    #[serde(rename = "0")]
    Zero,
    /// Decimal point (.)
    #[serde(rename = ".")]
    DecimalPoint,
    /// Sign negation (±)
    #[serde(rename = "±")]
    Negate,
    /// Clear everything (C)
    #[serde(rename = "C")]
    Clear,
    /// Drop the last entered character (←)
    #[serde(rename = "←")]
    Backspace,
    /// Evaluate (=)
    #[serde(rename = "=")]
    Equals,
    /// Addition (+)
    #[serde(rename = "+")]
    Plus,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Minus,
    /// Multiplication (×)
    #[serde(rename = "×")]
    Multiply,
    /// Division (÷)
    #[serde(rename = "÷")]
    Divide,
}

impl KeyCode {
    /// Every key code, in declaration order
    pub const ALL: [Self; 19] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Zero,
        Self::DecimalPoint,
        Self::Negate,
        Self::Clear,
        Self::Backspace,
        Self::Equals,
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
    ];

    /// Returns the identifier, which is also the button label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Zero => "0",
            Self::DecimalPoint => ".",
            Self::Negate => "±",
            Self::Clear => "C",
            Self::Backspace => "←",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the button label (identical to [`KeyCode::as_str`])
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }

    /// Returns the digit value for digit keys
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Zero => Some(0),
            Self::One => Some(1),
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            _ => None,
        }
    }

    /// Returns the key for a digit value (0-9)
    #[must_use]
    pub const fn from_digit(d: u8) -> Option<Self> {
        match d {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Returns the arithmetic operation for operator keys
    #[must_use]
    pub const fn operation(self) -> Option<Operation> {
        match self {
            Self::Plus => Some(Operation::Add),
            Self::Minus => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
            _ => None,
        }
    }

    /// True for the ten digit keys
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.digit().is_some()
    }

    /// True for the four arithmetic operator keys
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.operation().is_some()
    }

    /// Maps a character typed on a regular keyboard onto a key.
    ///
    /// Besides the labels themselves this accepts the ASCII spellings
    /// people actually type: `*`/`x` for ×, `/` for ÷, `c` for C,
    /// `_` for ± and `,` for the decimal point.
    #[must_use]
    pub fn from_keyboard(ch: char) -> Option<Self> {
        match ch {
            '*' | 'x' | 'X' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            'c' => Some(Self::Clear),
            '_' => Some(Self::Negate),
            ',' => Some(Self::DecimalPoint),
            other => Self::try_from(other).ok(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCode {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ViewError::InvalidKeyCode(s.to_string()))
    }
}

impl TryFrom<&str> for KeyCode {
    type Error = ViewError;

    fn try_from(s: &str) -> ViewResult<Self> {
        s.parse()
    }
}

impl TryFrom<char> for KeyCode {
    type Error = ViewError;

    fn try_from(ch: char) -> ViewResult<Self> {
        let mut buf = [0u8; 4];
        ch.encode_utf8(&mut buf).parse()
    }
}

impl AsRef<str> for KeyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
