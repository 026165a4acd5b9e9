//! Ansiscroll - styled scrollback for ANSI-colored text
//!
//! This library turns text annotated with ANSI SGR escape sequences into
//! styled runs, keeps a scrollback log of them, and maintains an editable
//! input line. Rendering the runs is left to the caller.
//!
//! ## Module Organization
//!
//! - [`terminal`] - Tokenizer, format engine, scrollback log, input line
//! - [`models`] - Data structures (Color, Style, Token, StyledRun, Config)
//! - [`ansi`] - Presentation mapping for renderers
//! - [`config`] - Configuration file loading
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use ansiscroll::{parse, FormatMode, Color};
//!
//! let (runs, mode) = parse("\x1b[1;31mError:\x1b[0m disk full", FormatMode::default())?;
//! assert_eq!(runs[0].text, "Error:");
//! assert_eq!(runs[0].style.foreground, Color::Red);
//! assert!(runs[1].style.is_default());
//!
//! // Feed `mode` into the next call for the same stream.
//! let (next, _) = parse("more", mode)?;
//! assert!(next[0].style.is_default());
//! # Ok::<(), ansiscroll::ParseError>(())
//! ```
//!
//! ## Formatting across messages
//!
//! SGR state is not reset between messages. A bold flag set at the end of
//! one message still applies to the next one as long as the returned
//! [`FormatMode`] is threaded through, which [`Scrollback`] does for you.
//! Messages must be fed in delivery order.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod error;
pub mod models;
pub mod terminal;

// Re-exports for core functionality
pub use ansi::{PresentationStyle, PresentedRun};
pub use config::{Config, ConfigLoader};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use models::{Color, Decoration, FormatMode, Style, StyledRun, Token};
pub use terminal::{
    apply_tokens, parse, tokenize, EntryKind, InputEvent, InputKey, InputLine, LogEntry,
    Scrollback,
};

/// The current version of Ansiscroll from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// A scrollback log and input line built from one configuration
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub scrollback: Scrollback,
    pub input: InputLine,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            scrollback: Scrollback::with_config(config),
            input: InputLine::with_config(&config.input),
        }
    }

    /// Handle an editing key. A submitted line is echoed into the scrollback
    /// and returned to the caller for delivery.
    pub fn process_key(&mut self, key: InputKey) -> Option<String> {
        match self.input.process_key(key) {
            InputEvent::Submitted(text) => {
                self.scrollback.echo(&text);
                Some(text)
            }
            InputEvent::Changed | InputEvent::NoOp => None,
        }
    }
}

/// Load configuration from the default locations and build a [`Session`]
///
/// # Errors
///
/// Fails if a configuration file exists but cannot be read, parsed or
/// validated.
pub fn init() -> Result<Session> {
    info!("Initializing {} v{}", NAME, VERSION);
    let config = ConfigLoader::load()?;
    Ok(Session::new(&config))
}

/// Build a [`Session`] from an explicit configuration file
///
/// # Errors
///
/// Fails if the file cannot be read, parsed or validated.
pub fn init_with_config(path: &std::path::Path) -> Result<Session> {
    info!("Initializing {} v{} with {}", NAME, VERSION, path.display());
    let config = ConfigLoader::load_from_path(path)?;
    Ok(Session::new(&config))
}
