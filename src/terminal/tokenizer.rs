//! ANSI Escape Tokenizer
//!
//! Splits a message into literal content runs and SGR parameter lists.
//! Only `ESC [ <digits and ;> m` is understood; any other escape sequence
//! fails the whole message with a [`ParseError`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseErrorKind};
use crate::models::Token;

/// Escape character that starts every control sequence
pub const ESC: char = '\x1b';

/// A complete SGR sequence anchored at an ESC
static SGR_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\x1b\[([0-9;]*)m").expect("SGR pattern is valid"));

/// The longest valid prefix of a control sequence, used to locate errors
static CSI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\x1b\[[0-9;]*").expect("CSI pattern is valid"));

/// Tokenize one message.
///
/// Tokens come back in source order. Content tokens are never empty and
/// never contain ESC. An empty parameter slot (as in `ESC[;1m`) reads as 0,
/// while a bare `ESC[m` yields an empty parameter list. Parameters above
/// `u16::MAX` saturate; the format engine ignores them like any other
/// unsupported code.
///
/// # Errors
///
/// Returns [`ParseError`] for ESC not followed by `[`, any character other
/// than a digit or `;` before the final `m`, or input that ends inside a
/// sequence. No tokens are returned in that case.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(ESC) {
        let esc = cursor + offset;
        if esc > cursor {
            tokens.push(Token::Content(input[cursor..esc].to_string()));
        }

        let rest = &input[esc..];
        let captures = SGR_SEQUENCE
            .captures(rest)
            .ok_or_else(|| locate_error(rest, esc, input.len()))?;
        let params = parse_params(captures.get(1).map_or("", |m| m.as_str()));
        trace!("SGR parameters {:?} at byte {}", params, esc);
        tokens.push(Token::Sgr(params));

        cursor = esc + captures.get(0).map_or(rest.len(), |m| m.end());
    }

    if cursor < input.len() {
        tokens.push(Token::Content(input[cursor..].to_string()));
    }
    Ok(tokens)
}

/// Split a `;`-separated parameter list. Empty slots read as 0.
fn parse_params(body: &str) -> Vec<u16> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split(';')
        .map(|slot| {
            if slot.is_empty() {
                0
            } else {
                // only digits reach here, so the sole failure is overflow
                slot.parse::<u16>().unwrap_or(u16::MAX)
            }
        })
        .collect()
}

/// Build the error for a sequence at `esc` that did not match
fn locate_error(rest: &str, esc: usize, input_len: usize) -> ParseError {
    let mut chars = rest.chars().skip(1);
    match chars.next() {
        None => return ParseError::new(input_len, ParseErrorKind::UnexpectedEnd),
        Some('[') => {}
        Some(_) => return ParseError::new(esc + ESC.len_utf8(), ParseErrorKind::MissingBracket),
    }

    let prefix = CSI_PREFIX.find(rest).map_or(2, |m| m.end());
    match rest[prefix..].chars().next() {
        Some(ch) => ParseError::new(esc + prefix, ParseErrorKind::UnexpectedChar(ch)),
        None => ParseError::new(input_len, ParseErrorKind::UnexpectedEnd),
    }
}
