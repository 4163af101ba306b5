//! Toolbar
//!
//! The band at the top of the terminal holding three categories of
//! selectable swatches: colors, stroke glyphs, and stroke widths.
//!
//! The categories are fixed at startup. Everything positional lives in
//! [`ToolbarLayout`], which is rebuilt for every frame from the current
//! terminal width.

mod layout;

pub use layout::{Hitbox, Token, ToolbarLayout, HIT_TOLERANCE};

use ratatui::style::Color;

use crate::theme::{SWATCH_BLUE, SWATCH_GREEN, SWATCH_RED};

/// Glyph every color swatch is drawn with
pub const COLOR_GLYPH: &str = "⬤";

/// Padding at both ends of the strip (doubled between categories)
pub const PADDING: &str = "    ";

/// Spacing between swatches of one category
pub const INTER_PADDING: &str = "   ";

/// Toolbar band height in rows
pub const DEFAULT_HEIGHT: u16 = 5;

/// Smallest band that keeps the selectable row inside its frame
pub const MIN_HEIGHT: u16 = 4;

/// Columns the band's frame takes on either side
pub const BORDER: u16 = 1;

/// Stroke glyphs offered out of the box
pub const DEFAULT_STROKES: [&str; 4] = ["#", ".", "-", "█"];

/// Stroke width markers offered out of the box
pub const DEFAULT_WIDTHS: [&str; 3] = ["◼", "◼◼", "◼◼◼"];

/// The three swatch categories, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Colors,
    Strokes,
    Widths,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Strokes => "strokes",
            Self::Widths => "width",
        }
    }
}

/// One swatch, identified by category and position within it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub category: Category,
    pub index: usize,
}

/// What a swatch stands for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwatchValue<'a> {
    Color(Color),
    Stroke(&'a str),
    Width(&'a str),
}

/// The fixed set of categories plus the band height
#[derive(Clone, Debug, PartialEq)]
pub struct Toolbar {
    colors: Vec<Color>,
    strokes: Vec<String>,
    widths: Vec<String>,
    height: u16,
}

impl Toolbar {
    pub fn new(colors: Vec<Color>, strokes: Vec<String>, widths: Vec<String>, height: u16) -> Self {
        Self {
            colors,
            strokes,
            widths,
            height,
        }
    }

    /// Rows reserved for the toolbar band
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The one row on which swatches are drawn and can be pressed
    pub fn selectable_row(&self) -> u16 {
        (self.height / 2).saturating_sub(1)
    }

    /// Whether terminal row `y` falls inside the toolbar band
    pub fn contains_row(&self, y: u16) -> bool {
        y < self.height
    }

    /// Number of swatches in a category
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Colors => self.colors.len(),
            Category::Strokes => self.strokes.len(),
            Category::Widths => self.widths.len(),
        }
    }

    /// Resolve a swatch to its configured value
    pub fn value(&self, swatch: Swatch) -> Option<SwatchValue<'_>> {
        match swatch.category {
            Category::Colors => self.colors.get(swatch.index).copied().map(SwatchValue::Color),
            Category::Strokes => self
                .strokes
                .get(swatch.index)
                .map(|s| SwatchValue::Stroke(s.as_str())),
            Category::Widths => self
                .widths
                .get(swatch.index)
                .map(|s| SwatchValue::Width(s.as_str())),
        }
    }

    /// Lay the strip out for a terminal `width` columns wide
    pub fn layout(&self, width: u16) -> ToolbarLayout {
        ToolbarLayout::build(self, width)
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(
            vec![SWATCH_RED, SWATCH_BLUE, SWATCH_GREEN],
            DEFAULT_STROKES.map(String::from).to_vec(),
            DEFAULT_WIDTHS.map(String::from).to_vec(),
            DEFAULT_HEIGHT,
        )
    }
}
