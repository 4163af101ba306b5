//! Cell - one grid position, glyph and color kept apart

use ratatui::style::Color;

const BLANK: &str = " ";
const TERMINATOR: &str = "\n";

/// A single canvas cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// What is drawn
    glyph: String,
    /// How it looks
    color: Color,
}

impl Cell {
    /// A painted cell
    pub fn new(glyph: impl Into<String>, color: Color) -> Self {
        Self {
            glyph: glyph.into(),
            color,
        }
    }

    /// An unpainted cell
    pub fn blank() -> Self {
        Self::new(BLANK, Color::Reset)
    }

    /// The row terminator occupying the last column of every row
    pub fn terminator() -> Self {
        Self::new(TERMINATOR, Color::Reset)
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_blank(&self) -> bool {
        self.glyph == BLANK
    }

    pub fn is_terminator(&self) -> bool {
        self.glyph == TERMINATOR
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}
