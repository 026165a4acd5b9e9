//! Styled Run Model
//!
//! A contiguous piece of literal text tagged with the style that was active
//! when it was read. Runs are never split or merged after creation.

use serde::{Deserialize, Serialize};

use super::style::Style;
use crate::ansi::PresentedRun;

/// Text plus the style frozen at parse time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub style: Style,
    pub text: String,
}

impl StyledRun {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Style::DEFAULT, text)
    }

    /// Presentation-facing form, with reverse video already resolved
    pub fn present(&self) -> PresentedRun {
        PresentedRun::from(self)
    }
}
