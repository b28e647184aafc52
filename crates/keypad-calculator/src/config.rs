//! Calculator configuration
//!
//! Loaded from YAML; every field has a default so partial files work.
//!
//! ```yaml
//! display:
//!   max_items: 12
//!   overflow: reject
//! highlight_ms: 150
//! log_filter: info
//! log_file: keypad-calculator.log
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::MIN_DISPLAY_ITEMS;
use crate::display::{OverflowPolicy, TextDisplay};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid YAML for this schema
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A value is out of range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Create an out-of-range error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display capacity in characters
    pub max_items: usize,
    /// What to do with text longer than `max_items`
    pub overflow: OverflowPolicy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_items: 12,
            overflow: OverflowPolicy::Reject,
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display settings
    pub display: DisplayConfig,
    /// Length of the keypad highlight pulse in milliseconds
    pub highlight_ms: u64,
    /// Tracing filter used when no environment override is set
    pub log_filter: String,
    /// Log file; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            highlight_ms: 150,
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Checks value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.display.max_items < MIN_DISPLAY_ITEMS {
            return Err(ConfigError::invalid(format!(
                "display.max_items must be at least {MIN_DISPLAY_ITEMS}, got {}",
                self.display.max_items
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::invalid("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Set display capacity
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.display.max_items = max_items;
        self
    }

    /// Set overflow policy
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.display.overflow = overflow;
        self
    }

    /// Set highlight pulse length
    #[must_use]
    pub const fn with_highlight_ms(mut self, ms: u64) -> Self {
        self.highlight_ms = ms;
        self
    }

    /// Set tracing filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Highlight pulse length
    #[must_use]
    pub const fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Builds the display described by this configuration
    #[must_use]
    pub fn build_display(&self) -> TextDisplay {
        TextDisplay::with_policy(self.display.max_items, self.display.overflow)
    }
}
