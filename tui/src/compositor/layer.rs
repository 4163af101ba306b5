//! Layer - One region of the frame with its own buffer

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;

/// A region of the frame drawn independently of the others
pub struct Layer {
    /// Stacking order, higher drawn later
    pub z_index: i32,
    /// Where the layer sits on the frame
    pub bounds: Rect,
    /// Layer contents, origin at (0, 0)
    pub buffer: Buffer,
}

impl Layer {
    pub fn new(bounds: Rect, z_index: i32) -> Self {
        Self {
            z_index,
            bounds,
            buffer: Buffer::empty(Self::local(bounds)),
        }
    }

    /// Move to `bounds`, dropping the current contents
    pub fn place(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.buffer = Buffer::empty(Self::local(bounds));
    }

    /// Cell covering frame position (`x`, `y`), if the layer covers it
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&Cell> {
        if !self.bounds.contains((x, y).into()) {
            return None;
        }
        self.buffer.cell((x - self.bounds.x, y - self.bounds.y))
    }

    fn local(bounds: Rect) -> Rect {
        Rect::new(0, 0, bounds.width, bounds.height)
    }
}
