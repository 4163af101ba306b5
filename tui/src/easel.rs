//! Easel State
//!
//! The single owned value every event handler is threaded through: the
//! canvas, the brush, the toolbar categories, and the terminal size the
//! canvas was laid out for.

use crate::brush::Brush;
use crate::canvas::Canvas;
use crate::toolbar::{Swatch, SwatchValue, Toolbar};

/// Application state shared by the dispatcher and the renderer
#[derive(Clone, Debug)]
pub struct Easel {
    canvas: Canvas,
    brush: Brush,
    toolbar: Toolbar,
    /// Terminal size (columns, rows)
    size: (u16, u16),
}

impl Easel {
    /// Lay out a canvas for a terminal of `size` (columns, rows)
    pub fn new(size: (u16, u16), toolbar: Toolbar, brush: Brush) -> Self {
        let mut easel = Self {
            canvas: Canvas::default(),
            brush,
            toolbar,
            size,
        };
        easel.resize(size.0, size.1);
        easel
    }

    /// Adopt a new terminal size. The canvas is reallocated and loses
    /// everything drawn on it; the brush is kept.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let canvas_height = height.saturating_sub(self.toolbar.height());
        self.canvas
            .resize(usize::from(width), usize::from(canvas_height));
        tracing::debug!(
            width,
            height,
            canvas_width = self.canvas.width(),
            canvas_height = self.canvas.height(),
            "easel resized"
        );
    }

    /// Wipe the canvas at the current size
    pub fn clear(&mut self) {
        let (width, height) = self.size;
        self.resize(width, height);
    }

    /// Apply a toolbar selection to the brush.
    ///
    /// Returns true when the brush changed.
    pub fn select(&mut self, swatch: Swatch) -> bool {
        match self.toolbar.value(swatch) {
            Some(SwatchValue::Color(color)) => {
                tracing::debug!(index = swatch.index, ?color, "color selected");
                self.brush.set_color(color);
                true
            }
            Some(SwatchValue::Stroke(glyph)) => {
                tracing::debug!(index = swatch.index, glyph, "stroke selected");
                self.brush.set_glyph(glyph);
                true
            }
            Some(SwatchValue::Width(marker)) => {
                tracing::debug!(
                    index = swatch.index,
                    marker,
                    "stroke width not yet implemented"
                );
                false
            }
            None => false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Terminal size (columns, rows)
    pub fn size(&self) -> (u16, u16) {
        self.size
    }
}
