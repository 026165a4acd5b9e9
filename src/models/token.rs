//! Tokenizer output: literal text and SGR parameter lists, in source order.

use serde::{Deserialize, Serialize};

/// One token of a tokenized message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A maximal run of text without ESC
    Content(String),
    /// Parameters of one `ESC [ ... m` sequence; empty means reset
    Sgr(Vec<u16>),
}

impl Token {
    /// True for a literal text run
    pub fn is_content(&self) -> bool {
        matches!(self, Token::Content(_))
    }

    /// True for an SGR parameter list
    pub fn is_sgr(&self) -> bool {
        matches!(self, Token::Sgr(_))
    }
}
