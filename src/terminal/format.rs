//! Format Engine
//!
//! Folds a token sequence left to right, carrying a [`FormatMode`] forward
//! and pairing every content token with the style active when it was read.
//! This step never fails: unsupported SGR codes simply leave the style alone.

use crate::models::{FormatMode, StyledRun, Token};

/// Transient state for one `apply_tokens` call
#[derive(Debug, Clone, PartialEq)]
pub struct FormatBuffer {
    runs: Vec<StyledRun>,
    mode: FormatMode,
}

impl FormatBuffer {
    /// Start a buffer seeded with the style carried over from the previous call
    pub fn new(mode: FormatMode) -> Self {
        Self {
            runs: Vec::new(),
            mode,
        }
    }

    /// Consume a single token
    pub fn push(&mut self, token: Token) {
        match token {
            Token::Content(text) => {
                self.runs
                    .push(StyledRun::new(self.mode.effective_style(), text));
            }
            Token::Sgr(params) => {
                self.mode = self.mode.apply_codes(&params);
            }
        }
    }

    /// Current mode
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// Runs emitted so far
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Hand back the runs and the mode to seed the next call with
    pub fn finish(self) -> (Vec<StyledRun>, FormatMode) {
        (self.runs, self.mode)
    }
}

/// Apply tokens starting from `initial`, returning the runs in encounter
/// order and the final mode.
pub fn apply_tokens<I>(tokens: I, initial: FormatMode) -> (Vec<StyledRun>, FormatMode)
where
    I: IntoIterator<Item = Token>,
{
    let mut buffer = FormatBuffer::new(initial);
    for token in tokens {
        buffer.push(token);
    }
    buffer.finish()
}
