//! Style Model
//!
//! A [`Style`] is a plain `Copy` value. Every SGR code produces a new value
//! through [`Style::apply_code`], so a run that captured a style keeps it no
//! matter what later escape sequences do.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Color;

/// Text style in effect for a run of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl Style {
    /// Initial style and the target of SGR 0
    pub const DEFAULT: Style = Style {
        foreground: Color::Default,
        background: Color::Default,
        bold: false,
        italic: false,
        underline: false,
        strike: false,
        blink: false,
        reverse: false,
    };

    /// Apply a single SGR parameter. Unsupported codes return `self` unchanged.
    pub fn apply_code(self, code: u16) -> Style {
        match code {
            0 => Style::DEFAULT,
            1 => Style { bold: true, ..self },
            3 => Style { italic: true, ..self },
            4 => Style { underline: true, ..self },
            5 | 6 => Style { blink: true, ..self },
            7 => Style { reverse: true, ..self },
            9 => Style { strike: true, ..self },
            21 => Style { bold: false, ..self },
            23 => Style { italic: false, ..self },
            24 => Style { underline: false, ..self },
            27 => Style { reverse: false, ..self },
            29 => Style { strike: false, ..self },
            30..=37 => Style {
                foreground: Color::from_ansi_index(code - 30).unwrap_or(self.foreground),
                ..self
            },
            39 => Style {
                foreground: Color::Default,
                ..self
            },
            40..=47 => Style {
                background: Color::from_ansi_index(code - 40).unwrap_or(self.background),
                ..self
            },
            49 => Style {
                background: Color::Default,
                ..self
            },
            90..=97 => Style {
                foreground: Color::from_bright_ansi_index(code - 90).unwrap_or(self.foreground),
                ..self
            },
            100..=107 => Style {
                background: Color::from_bright_ansi_index(code - 100).unwrap_or(self.background),
                ..self
            },
            // 38/48 (extended color) and everything else: no-op
            _ => self,
        }
    }

    /// Apply every parameter of one SGR sequence, left to right.
    ///
    /// An empty parameter list (bare `ESC[m`) means reset.
    pub fn apply_codes(self, codes: &[u16]) -> Style {
        if codes.is_empty() {
            return self.apply_code(0);
        }
        codes.iter().fold(self, |style, &code| style.apply_code(code))
    }

    /// Whether the given decoration flag is set
    pub fn has(&self, decoration: Decoration) -> bool {
        match decoration {
            Decoration::Bold => self.bold,
            Decoration::Italic => self.italic,
            Decoration::Underline => self.underline,
            Decoration::Strike => self.strike,
            Decoration::Blink => self.blink,
            Decoration::Reverse => self.reverse,
        }
    }

    /// Active decorations, in [`Decoration::ALL`] order
    pub fn decorations(&self) -> Vec<Decoration> {
        Decoration::ALL
            .into_iter()
            .filter(|decoration| self.has(*decoration))
            .collect()
    }

    /// True when this is exactly [`Style::DEFAULT`]
    pub fn is_default(&self) -> bool {
        *self == Style::DEFAULT
    }
}

/// Boolean text decoration flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    Bold,
    Italic,
    Underline,
    Strike,
    Blink,
    Reverse,
}

impl Decoration {
    pub const ALL: [Decoration; 6] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::Underline,
        Decoration::Strike,
        Decoration::Blink,
        Decoration::Reverse,
    ];

    /// Stable name used by renderers
    pub fn name(self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Italic => "italic",
            Decoration::Underline => "underline",
            Decoration::Strike => "strike",
            Decoration::Blink => "blink",
            Decoration::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether SGR sequences affect the output
///
/// `Disabled` still accepts escape sequences; it just throws their effect
/// away and renders every run with [`Style::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatMode {
    Disabled,
    Enabled(Style),
}

impl FormatMode {
    /// Style a content run picks up under this mode
    pub fn effective_style(&self) -> Style {
        match self {
            FormatMode::Disabled => Style::DEFAULT,
            FormatMode::Enabled(style) => *style,
        }
    }

    /// Fold one SGR parameter list into the mode
    pub fn apply_codes(self, codes: &[u16]) -> FormatMode {
        match self {
            FormatMode::Disabled => FormatMode::Disabled,
            FormatMode::Enabled(style) => FormatMode::Enabled(style.apply_codes(codes)),
        }
    }

    /// Whether SGR codes are currently applied
    pub fn is_enabled(&self) -> bool {
        matches!(self, FormatMode::Enabled(_))
    }

    /// The active style, or `None` while formatting is disabled
    pub fn style(&self) -> Option<Style> {
        match self {
            FormatMode::Disabled => None,
            FormatMode::Enabled(style) => Some(*style),
        }
    }
}

impl Default for FormatMode {
    fn default() -> Self {
        FormatMode::Enabled(Style::DEFAULT)
    }
}

impl From<Option<Style>> for FormatMode {
    fn from(style: Option<Style>) -> Self {
        match style {
            Some(style) => FormatMode::Enabled(style),
            None => FormatMode::Disabled,
        }
    }
}

impl From<FormatMode> for Option<Style> {
    fn from(mode: FormatMode) -> Self {
        mode.style()
    }
}
