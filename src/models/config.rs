//! Configuration Model
//!
//! User-configurable settings: whether SGR formatting is honored, how much
//! scrollback is retained and how many submitted lines the input remembers.

use serde::{Deserialize, Serialize};

use super::style::FormatMode;

/// Upper bound for `scrollback.max_entries`
pub const MAX_SCROLLBACK_ENTRIES: usize = 100_000;
/// Upper bound for `input.history_size`
pub const MAX_INPUT_HISTORY: usize = 10_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SGR formatting configuration
    pub formatting: FormattingConfig,

    /// Scrollback log configuration
    pub scrollback: ScrollbackConfig,

    /// Input line configuration
    pub input: InputConfig,
}

/// SGR formatting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// When false, escape sequences are parsed but have no visual effect
    pub enabled: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl FormattingConfig {
    /// Mode a fresh stream starts in
    pub fn initial_mode(&self) -> FormatMode {
        if self.enabled {
            FormatMode::default()
        } else {
            FormatMode::Disabled
        }
    }
}

/// Scrollback log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbackConfig {
    /// Maximum number of log entries kept before the oldest are evicted
    pub max_entries: usize,
}

impl Default for ScrollbackConfig {
    fn default() -> Self {
        Self { max_entries: 1000 }
    }
}

impl ScrollbackConfig {
    /// Validate the scrollback configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 || self.max_entries > MAX_SCROLLBACK_ENTRIES {
            return Err(ConfigError::InvalidScrollbackEntries(self.max_entries));
        }
        Ok(())
    }
}

/// Input line configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Number of submitted lines remembered for history navigation
    pub history_size: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { history_size: 100 }
    }
}

impl InputConfig {
    /// Validate the input configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_size == 0 || self.history_size > MAX_INPUT_HISTORY {
            return Err(ConfigError::InvalidHistorySize(self.history_size));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid scrollback entries: {0} (must be between 1 and 100000)")]
    InvalidScrollbackEntries(usize),

    #[error("Invalid input history size: {0} (must be between 1 and 10000)")]
    InvalidHistorySize(usize),
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scrollback.validate()?;
        self.input.validate()?;
        Ok(())
    }
}
