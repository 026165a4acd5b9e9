//! Color Model
//!
//! The sixteen ANSI palette colors plus a `Default` sentinel. Colors are
//! pure data; turning them into pixels or CSS is left to the renderer, which
//! keys off the stable names returned by [`Color::name`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// ANSI palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// Whatever the renderer considers "unset"
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every variant, in palette order
    pub const ALL: [Color; 17] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Create color from standard ANSI index (0-7)
    pub fn from_ansi_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// Create color from bright ANSI index (0-7)
    pub fn from_bright_ansi_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Color::BrightBlack),
            1 => Some(Color::BrightRed),
            2 => Some(Color::BrightGreen),
            3 => Some(Color::BrightYellow),
            4 => Some(Color::BrightBlue),
            5 => Some(Color::BrightMagenta),
            6 => Some(Color::BrightCyan),
            7 => Some(Color::BrightWhite),
            _ => None,
        }
    }

    /// Stable kebab-case name used by renderers, e.g. `"bright-red"`
    pub fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
        }
    }

    /// Inverse of [`Color::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Whether this is one of the bright (90-97 / 100-107) variants
    pub fn is_bright(self) -> bool {
        matches!(
            self,
            Color::BrightBlack
                | Color::BrightRed
                | Color::BrightGreen
                | Color::BrightYellow
                | Color::BrightBlue
                | Color::BrightMagenta
                | Color::BrightCyan
                | Color::BrightWhite
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
