//! Brush State
//!
//! The glyph and color used when painting. Survives resizes and clears.

use ratatui::style::Color;

use crate::canvas::Cell;
use crate::theme::BRUSH_DEFAULT;

/// Glyph painted before anything else is chosen
pub const DEFAULT_GLYPH: &str = "#";

/// Glyph bound to `e`
pub const ERASER_GLYPH: &str = " ";

/// Glyph bound to `b`
pub const BLOCK_GLYPH: &str = "█";

/// Current glyph and foreground color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    glyph: String,
    color: Color,
}

impl Brush {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            color: BRUSH_DEFAULT,
        }
    }

    /// Set the painted glyph; an empty glyph is ignored
    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        if glyph.is_empty() {
            return;
        }
        self.glyph = glyph;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The cell this brush leaves behind
    pub fn cell(&self) -> Cell {
        Cell::new(self.glyph.clone(), self.color)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPH)
    }
}
