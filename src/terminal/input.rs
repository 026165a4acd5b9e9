//! Input Line
//!
//! Editable single-line input with a char-indexed cursor and a bounded
//! history of submitted lines.

use std::collections::VecDeque;

use crate::models::config::InputConfig;

/// Editing keys understood by [`InputLine::process_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
}

/// Result of processing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Buffer or cursor changed
    Changed,
    /// Enter on a non-blank line; carries the submitted text
    Submitted(String),
    /// Nothing happened
    NoOp,
}

/// Editable input line
#[derive(Debug, Clone)]
pub struct InputLine {
    buffer: Vec<char>,
    /// Cursor position, in chars
    cursor: usize,
    history: VecDeque<String>,
    history_size: usize,
    history_position: Option<usize>,
    /// Text being edited before history navigation started
    draft: Option<String>,
}

impl InputLine {
    pub fn new(history_size: usize) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            history: VecDeque::new(),
            history_size: history_size.max(1),
            history_position: None,
            draft: None,
        }
    }

    pub fn with_config(config: &InputConfig) -> Self {
        Self::new(config.history_size)
    }

    /// Dispatch a key
    pub fn process_key(&mut self, key: InputKey) -> InputEvent {
        match key {
            InputKey::Char(ch) if ch.is_control() => InputEvent::NoOp,
            InputKey::Char(ch) => self.insert_char(ch),
            InputKey::Backspace => self.backspace(),
            InputKey::Delete => self.delete(),
            InputKey::Left => self.move_left(),
            InputKey::Right => self.move_right(),
            InputKey::Home => self.move_home(),
            InputKey::End => self.move_end(),
            InputKey::Up => self.history_previous(),
            InputKey::Down => self.history_next(),
            InputKey::Enter => {
                if self.is_blank() {
                    InputEvent::NoOp
                } else {
                    InputEvent::Submitted(self.submit())
                }
            }
        }
    }

    pub fn insert_char(&mut self, ch: char) -> InputEvent {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
        InputEvent::Changed
    }

    pub fn insert_str(&mut self, text: &str) -> InputEvent {
        if text.is_empty() {
            return InputEvent::NoOp;
        }
        for ch in text.chars() {
            self.insert_char(ch);
        }
        InputEvent::Changed
    }

    /// Remove the char before the cursor
    pub fn backspace(&mut self) -> InputEvent {
        if self.cursor == 0 {
            return InputEvent::NoOp;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        InputEvent::Changed
    }

    /// Remove the char under the cursor
    pub fn delete(&mut self) -> InputEvent {
        if self.cursor >= self.buffer.len() {
            return InputEvent::NoOp;
        }
        self.buffer.remove(self.cursor);
        InputEvent::Changed
    }

    pub fn move_left(&mut self) -> InputEvent {
        if self.cursor == 0 {
            return InputEvent::NoOp;
        }
        self.cursor -= 1;
        InputEvent::Changed
    }

    pub fn move_right(&mut self) -> InputEvent {
        if self.cursor >= self.buffer.len() {
            return InputEvent::NoOp;
        }
        self.cursor += 1;
        InputEvent::Changed
    }

    pub fn move_home(&mut self) -> InputEvent {
        if self.cursor == 0 {
            return InputEvent::NoOp;
        }
        self.cursor = 0;
        InputEvent::Changed
    }

    pub fn move_end(&mut self) -> InputEvent {
        if self.cursor == self.buffer.len() {
            return InputEvent::NoOp;
        }
        self.cursor = self.buffer.len();
        InputEvent::Changed
    }

    /// Take the current text and clear the line.
    ///
    /// Non-blank text is appended to history.
    pub fn submit(&mut self) -> String {
        let text: String = self.buffer.drain(..).collect();
        self.cursor = 0;
        self.history_position = None;
        self.draft = None;

        if !text.trim().is_empty() {
            if self.history.len() >= self.history_size {
                self.history.pop_front();
            }
            self.history.push_back(text.clone());
        }
        text
    }

    /// Step back through submitted lines
    pub fn history_previous(&mut self) -> InputEvent {
        if self.history.is_empty() {
            return InputEvent::NoOp;
        }

        let position = match self.history_position {
            None => {
                self.draft = Some(self.text());
                self.history.len() - 1
            }
            Some(pos) if pos > 0 => pos - 1,
            Some(_) => return InputEvent::NoOp,
        };

        self.history_position = Some(position);
        let entry = self.history[position].clone();
        self.set_text(&entry);
        InputEvent::Changed
    }

    /// Step forward; past the newest entry the draft comes back
    pub fn history_next(&mut self) -> InputEvent {
        let Some(pos) = self.history_position else {
            return InputEvent::NoOp;
        };

        if pos + 1 < self.history.len() {
            self.history_position = Some(pos + 1);
            let entry = self.history[pos + 1].clone();
            self.set_text(&entry);
        } else {
            self.history_position = None;
            let draft = self.draft.take().unwrap_or_default();
            self.set_text(&draft);
        }
        InputEvent::Changed
    }

    /// Replace the buffer and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn is_blank(&self) -> bool {
        self.buffer.iter().all(|ch| ch.is_whitespace())
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::with_config(&InputConfig::default())
    }
}
