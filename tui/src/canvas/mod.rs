//! Canvas Grid
//!
//! The paintable character grid below the toolbar band.
//!
//! Every row holds exactly `width` cells. The last cell of each row is a
//! row terminator, not a paintable cell, so `flatten()` yields one
//! newline-terminated line per row.
//!
//! Coordinates handed to [`Canvas::paint`] come straight from the mouse
//! and are not trusted: out-of-range writes are refused, never faulted.

mod cell;

pub use cell::Cell;

use ratatui::style::Color;

/// The drawable grid
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    /// Rows of cells, each `width` long (terminator included)
    rows: Vec<Vec<Cell>>,
    /// Columns per row, terminator included
    width: usize,
}

impl Canvas {
    /// Create a canvas of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let mut canvas = Self::default();
        canvas.resize(width, height);
        canvas
    }

    /// Reallocate the grid, discarding everything drawn so far.
    ///
    /// A zero dimension leaves the canvas empty; painting into an empty
    /// canvas is a no-op.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "canvas resized to nothing");
            self.rows = Vec::new();
            self.width = 0;
            return;
        }

        let mut row = vec![Cell::blank(); width];
        row[width - 1] = Cell::terminator();

        self.rows = vec![row; height];
        self.width = width;
    }

    /// Reset every paintable cell to blank at the current dimensions
    pub fn clear(&mut self) {
        self.resize(self.width, self.rows.len());
    }

    /// Write `cell` at (`row`, `col`).
    ///
    /// Returns false, leaving the grid untouched, when the position is
    /// outside the grid or lands on a row terminator.
    pub fn paint(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if col >= self.paintable_width() {
            tracing::trace!(row, col, "paint refused: column out of range");
            return false;
        }
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => {
                tracing::trace!(row, col, "paint refused: row out of range");
                false
            }
        }
    }

    /// Paint a glyph in the given color
    pub fn paint_glyph(&mut self, row: usize, col: usize, glyph: &str, color: Color) -> bool {
        self.paint(row, col, Cell::new(glyph, color))
    }

    /// Cell at (`row`, `col`), terminator column included
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Concatenate every row's glyphs, terminators included, in row-major order
    pub fn flatten(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * self.width);
        for row in &self.rows {
            for cell in row {
                out.push_str(cell.glyph());
            }
        }
        out
    }

    /// Iterate rows of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Columns per row, terminator included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Columns that accept paint
    pub fn paintable_width(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// True when the canvas has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
