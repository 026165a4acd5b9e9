//! Message processing
//!
//! Raw string in, styled runs out: [`tokenizer`] splits the message,
//! [`format`] folds the tokens into runs. [`output`] keeps the resulting
//! scrollback and [`input`] the editable input line.

pub mod format;
pub mod input;
pub mod output;
pub mod tokenizer;

pub use format::{apply_tokens, FormatBuffer};
pub use input::{InputEvent, InputKey, InputLine};
pub use output::{EntryKind, LogEntry, Scrollback};
pub use tokenizer::tokenize;

use crate::error::ParseError;
use crate::models::{FormatMode, StyledRun};

/// Tokenize `input` and apply it on top of `mode`.
///
/// Returns the runs plus the mode to pass into the next call for the same
/// stream, so formatting carries across message boundaries.
///
/// # Errors
///
/// Fails with the tokenizer's [`ParseError`]; nothing is applied in that case.
pub fn parse(input: &str, mode: FormatMode) -> Result<(Vec<StyledRun>, FormatMode), ParseError> {
    let tokens = tokenize(input)?;
    Ok(apply_tokens(tokens, mode))
}
