//! CanvasView Widget
//!
//! Draws the canvas grid cell by cell. Row terminators draw as blanks.
//! Every cell owns exactly one column: a glyph wider than that is cut to
//! what fits, never spilled into its neighbours.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::canvas::Canvas;

pub struct CanvasView<'a> {
    canvas: &'a Canvas,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, cells) in self.canvas.rows().take(usize::from(area.height)).enumerate() {
            let y = area.y + row as u16;
            for (col, cell) in cells.iter().take(usize::from(area.width)).enumerate() {
                if cell.is_terminator() || cell.is_blank() {
                    continue;
                }
                buf.set_stringn(
                    area.x + col as u16,
                    y,
                    cell.glyph(),
                    1,
                    Style::default().fg(cell.color()),
                );
            }
        }
    }
}
