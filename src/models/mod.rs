//! Core data models for Ansiscroll
//!
//! Pure value types shared by the tokenizer, the format engine and the
//! scrollback log: colors, styles, tokens, styled runs and configuration.

pub mod color;
pub mod config;
pub mod style;
pub mod styled_run;
pub mod token;

// Re-exports for convenience
pub use color::Color;
pub use config::Config;
pub use style::{Decoration, FormatMode, Style};
pub use styled_run::StyledRun;
pub use token::Token;
