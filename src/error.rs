//! Error types and Result aliases for Ansiscroll

use std::fmt;
use std::path::PathBuf;

use crate::models::config::ConfigError;

/// Result type alias for Ansiscroll operations
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed escape sequence. The only error the tokenizer produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed escape sequence at byte {position}: {kind}")]
pub struct ParseError {
    /// Byte offset of the offending character, or the input length when the
    /// input ended mid-sequence
    pub position: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }
}

/// What was wrong with the escape sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// ESC not followed by `[`
    #[error("expected '[' after ESC")]
    MissingBracket,

    /// Anything other than a digit, `;` or the final `m` inside a CSI
    #[error("unexpected character {0:?} in control sequence")]
    UnexpectedChar(char),

    /// Input ended before the final `m`
    #[error("unexpected end of input inside control sequence")]
    UnexpectedEnd,
}

/// Main error type for Ansiscroll
#[derive(Debug)]
pub enum Error {
    // === Parsing ===
    /// Malformed escape sequence
    Parse(ParseError),

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    ConfigValidation(ConfigError),

    // === I/O ===
    /// I/O errors
    Io(std::io::Error),

    // === Generic fallback (use sparingly) ===
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Parse error: {}", err),

            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigValidation(err) => {
                write!(f, "Configuration validation failed: {}", err)
            }

            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::ConfigValidation(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::ConfigValidation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
