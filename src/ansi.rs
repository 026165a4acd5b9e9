//! Style presentation
//!
//! Converts a [`Style`] into the form a renderer consumes: symbolic color
//! and decoration names, with reverse video already resolved. The stored
//! style is never modified; the swap only exists in the presented copy.

use serde::{Deserialize, Serialize};

use crate::models::{Color, Decoration, Style, StyledRun};

/// Renderer-facing style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationStyle {
    pub foreground: Color,
    pub background: Color,
    /// Active decorations, excluding `Reverse` (already applied to the colors)
    pub decorations: Vec<Decoration>,
}

impl PresentationStyle {
    pub fn from_style(style: &Style) -> Self {
        let (foreground, background) = if style.reverse {
            (style.background, style.foreground)
        } else {
            (style.foreground, style.background)
        };

        let decorations = style
            .decorations()
            .into_iter()
            .filter(|decoration| *decoration != Decoration::Reverse)
            .collect();

        Self {
            foreground,
            background,
            decorations,
        }
    }

    /// Class-style names, e.g. `["fg-red", "bg-default", "bold"]`
    pub fn class_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(2 + self.decorations.len());
        names.push(format!("fg-{}", self.foreground.name()));
        names.push(format!("bg-{}", self.background.name()));
        names.extend(self.decorations.iter().map(|d| d.name().to_string()));
        names
    }
}

impl From<&Style> for PresentationStyle {
    fn from(style: &Style) -> Self {
        Self::from_style(style)
    }
}

/// Renderer-facing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedRun {
    pub text: String,
    pub style: PresentationStyle,
}

impl From<&StyledRun> for PresentedRun {
    fn from(run: &StyledRun) -> Self {
        Self {
            text: run.text.clone(),
            style: PresentationStyle::from_style(&run.style),
        }
    }
}

/// Present a slice of runs in order
pub fn present_runs(runs: &[StyledRun]) -> Vec<PresentedRun> {
    runs.iter().map(PresentedRun::from).collect()
}
