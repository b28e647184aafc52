//! Bounded text display
//!
//! [`TextDisplay`] is the toolkit-independent [`DisplayView`]. Frontends bind
//! to its [`TextVariable`] and redraw from it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::view::{DisplayView, TextVariable, ViewError, ViewResult};

/// What a display does with text longer than its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with [`ViewError::DisplayOverflow`], keep the previous text
    #[default]
    Reject,
    /// Keep the first `max_items` characters
    Truncate,
}

/// Display holding at most `max_items` characters
#[derive(Debug, Clone)]
pub struct TextDisplay {
    variable: TextVariable,
    max_items: usize,
    policy: OverflowPolicy,
}

impl TextDisplay {
    /// Creates an empty display rejecting overlong text
    #[must_use]
    pub fn new(max_items: usize) -> Self {
        Self::with_policy(max_items, OverflowPolicy::Reject)
    }

    /// Creates an empty display with an explicit overflow policy
    #[must_use]
    pub fn with_policy(max_items: usize, policy: OverflowPolicy) -> Self {
        Self {
            variable: TextVariable::new(),
            max_items,
            policy,
        }
    }

    /// Creates a display bound to an existing variable
    #[must_use]
    pub fn bound_to(variable: TextVariable, max_items: usize, policy: OverflowPolicy) -> Self {
        Self {
            variable,
            max_items,
            policy,
        }
    }

    /// The overflow policy fixed at construction
    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

impl DisplayView for TextDisplay {
    fn variable(&self) -> &TextVariable {
        &self.variable
    }

    fn update(&mut self, text: &str) -> ViewResult<()> {
        let len = text.chars().count();
        if len <= self.max_items {
            debug!(text, "display updated");
            self.variable.set(text);
            return Ok(());
        }

        match self.policy {
            OverflowPolicy::Reject => {
                warn!(len, max_items = self.max_items, "display update rejected");
                Err(ViewError::DisplayOverflow {
                    len,
                    max_items: self.max_items,
                })
            }
            OverflowPolicy::Truncate => {
                let truncated: String = text.chars().take(self.max_items).collect();
                debug!(text, shown = %truncated, "display update truncated");
                self.variable.set(truncated);
                Ok(())
            }
        }
    }

    fn max_items(&self) -> usize {
        self.max_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_display_is_empty() {
        let display = TextDisplay::new(8);
        assert_eq!(display.text(), "");
        assert_eq!(display.max_items(), 8);
        assert_eq!(display.policy(), OverflowPolicy::Reject);
    }

    #[test]
    fn test_update_exact_capacity() {
        let mut display = TextDisplay::new(8);
        display.update("12345678").unwrap();
        assert_eq!(display.text(), "12345678");
    }

    #[test]
    fn test_reject_overflow_keeps_text() {
        let mut display = TextDisplay::new(8);
        display.update("12345678").unwrap();
        let err = display.update("123456789").unwrap_err();
        assert_eq!(
            err,
            ViewError::DisplayOverflow {
                len: 9,
                max_items: 8
            }
        );
        assert_eq!(display.text(), "12345678");
    }

    #[test]
    fn test_reject_is_consistent() {
        let mut display = TextDisplay::new(3);
        for _ in 0..3 {
            assert!(display.update("1234").is_err());
        }
        assert_eq!(display.variable().version(), 0);
    }

    #[test]
    fn test_truncate_overflow() {
        let mut display = TextDisplay::with_policy(8, OverflowPolicy::Truncate);
        display.update("123456789").unwrap();
        assert_eq!(display.text(), "12345678");
        display.update("abcdefghijk").unwrap();
        assert_eq!(display.text(), "abcdefgh");
    }

    #[test]
    fn test_length_counted_in_chars() {
        let mut display = TextDisplay::new(3);
        // three chars, seven bytes
        display.update("±÷1").unwrap();
        assert_eq!(display.text(), "±÷1");

        let mut display = TextDisplay::with_policy(2, OverflowPolicy::Truncate);
        display.update("±÷1").unwrap();
        assert_eq!(display.text(), "±÷");
    }

    #[test]
    fn test_variable_writes_are_visible() {
        let mut display = TextDisplay::new(8);
        display.update("1").unwrap();
        display.variable().set("2");
        assert_eq!(display.text(), "2");
    }

    #[test]
    fn test_bound_to_shares_variable() {
        let var = TextVariable::new();
        let mut display = TextDisplay::bound_to(var.clone(), 4, OverflowPolicy::Reject);
        display.update("7").unwrap();
        assert_eq!(var.get(), "7");
    }

    #[test]
    fn test_zero_capacity() {
        let mut display = TextDisplay::new(0);
        display.update("").unwrap();
        assert!(display.update("1").is_err());
    }

    #[test]
    fn test_policy_serde_lowercase() {
        let json = serde_json::to_string(&OverflowPolicy::Truncate).unwrap();
        assert_eq!(json, "\"truncate\"");
        let policy: OverflowPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, OverflowPolicy::Reject);
    }
}
