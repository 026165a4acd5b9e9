//! Configuration management for Ansiscroll
//!
//! The configuration types live in [`crate::models::config`]; this module
//! finds, reads, validates and writes configuration files.

pub mod loader;

pub use crate::models::config::{
    Config, ConfigError, FormattingConfig, InputConfig, ScrollbackConfig,
};
pub use loader::{ConfigFormat, ConfigLoader};
