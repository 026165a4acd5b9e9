//! Scrollback Log
//!
//! Keeps the ordered list of rendered messages and threads the format mode
//! from one `receive` call to the next. Messages that fail to tokenize are
//! still shown, verbatim and unstyled, so nothing the peer sent is lost.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse;
use super::tokenizer::ESC;
use crate::error::ParseError;
use crate::models::{Config, FormatMode, Style, StyledRun};

/// Visible stand-in for ESC in raw entries
const ESC_SYMBOL: char = '\u{241b}';

/// How an entry got into the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Parsed successfully
    Received,
    /// Failed to parse; shown verbatim
    Raw,
    /// Locally submitted input
    Echo,
}

/// A single message in the scrollback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub runs: Vec<StyledRun>,
    pub received_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(kind: EntryKind, runs: Vec<StyledRun>) -> Self {
        Self {
            kind,
            runs,
            received_at: Utc::now(),
        }
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Bounded log of styled messages
#[derive(Debug, Clone)]
pub struct Scrollback {
    entries: VecDeque<LogEntry>,
    mode: FormatMode,
    max_entries: usize,
}

impl Scrollback {
    /// Create a scrollback with the given capacity and formatting enabled
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            mode: FormatMode::default(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            mode: config.formatting.initial_mode(),
            ..Self::new(config.scrollback.max_entries)
        }
    }

    /// Parse one message and append it.
    ///
    /// # Errors
    ///
    /// On a malformed escape sequence the message is appended as a
    /// [`EntryKind::Raw`] entry, the carried mode is left as it was, and the
    /// [`ParseError`] is returned.
    pub fn receive(&mut self, message: &str) -> Result<&LogEntry, ParseError> {
        match parse(message, self.mode) {
            Ok((runs, mode)) => {
                debug!("Received message: {} runs", runs.len());
                self.mode = mode;
                Ok(self.push(LogEntry::new(EntryKind::Received, runs)))
            }
            Err(err) => {
                warn!("Failed to parse message, showing it raw: {}", err);
                let visible: String = message
                    .chars()
                    .map(|ch| if ch == ESC { ESC_SYMBOL } else { ch })
                    .collect();
                self.push(LogEntry::new(EntryKind::Raw, vec![StyledRun::plain(visible)]));
                Err(err)
            }
        }
    }

    /// Append locally submitted text, unstyled. Does not touch the mode.
    pub fn echo(&mut self, text: &str) -> &LogEntry {
        self.push(LogEntry::new(EntryKind::Echo, vec![StyledRun::plain(text)]))
    }

    fn push(&mut self, entry: LogEntry) -> &LogEntry {
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Mode the next message starts from
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// Turn SGR handling on or off. Re-enabling starts from the default style.
    pub fn set_formatting(&mut self, enabled: bool) {
        self.mode = match (enabled, self.mode) {
            (false, _) => FormatMode::Disabled,
            (true, FormatMode::Disabled) => FormatMode::Enabled(Style::DEFAULT),
            (true, mode) => mode,
        };
        info!("Formatting {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Drop any style carried over from earlier messages
    pub fn reset_style(&mut self) {
        if self.mode.is_enabled() {
            self.mode = FormatMode::Enabled(Style::DEFAULT);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Remove all entries; the carried mode is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Text of every entry, one per line
    pub fn plain_text(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}
