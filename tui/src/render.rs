//! Renderer
//!
//! Builds one full frame per call: the toolbar band on top, the canvas
//! below it. The toolbar layout computed for the frame is handed back to
//! the caller so the next press is hit-tested against exactly what was
//! drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::compositor::{Compositor, LayerId};
use crate::easel::Easel;
use crate::theme::{TOOLBAR_BG, TOOLBAR_BORDER};
use crate::toolbar::ToolbarLayout;
use crate::widgets::{CanvasView, SwatchStrip};

/// A composed frame and the layout its toolbar was drawn from
pub struct RenderedFrame<'a> {
    pub layout: ToolbarLayout,
    pub buffer: &'a Buffer,
}

/// Frame composer
pub struct Renderer {
    compositor: Compositor,
    toolbar: LayerId,
    canvas: LayerId,
    show_hitboxes: bool,
}

impl Renderer {
    pub fn new(show_hitboxes: bool) -> Self {
        let mut compositor = Compositor::new(Rect::default());
        let canvas = compositor.create_layer(Rect::default(), 0);
        let toolbar = compositor.create_layer(Rect::default(), 10);

        Self {
            compositor,
            toolbar,
            canvas,
            show_hitboxes,
        }
    }

    /// Compose the frame for the easel's current terminal size
    pub fn render(&mut self, easel: &Easel) -> RenderedFrame<'_> {
        let (width, height) = easel.size();
        let band = easel.toolbar().height().min(height);
        self.fit(width, height, band);

        let layout = easel.toolbar().layout(width);

        if let Some(buf) = self.compositor.layer_buffer_mut(self.toolbar) {
            buf.reset();
            let area = buf.area;
            let chrome = Style::default().bg(TOOLBAR_BG);
            Block::bordered()
                .style(chrome)
                .border_style(chrome.fg(TOOLBAR_BORDER))
                .render(area, buf);
            SwatchStrip::new(&layout)
                .style(chrome)
                .show_hitboxes(self.show_hitboxes)
                .render(area, buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.canvas) {
            buf.reset();
            let area = buf.area;
            CanvasView::new(easel.canvas()).render(area, buf);
        }

        RenderedFrame {
            layout,
            buffer: self.compositor.composite(),
        }
    }

    /// Re-place the layers when the terminal size changed
    fn fit(&mut self, width: u16, height: u16, band: u16) {
        let area = Rect::new(0, 0, width, height);
        if self.compositor.area() == area {
            return;
        }
        self.compositor.resize(area);
        self.compositor
            .place_layer(self.toolbar, Rect::new(0, 0, width, band));
        self.compositor
            .place_layer(self.canvas, Rect::new(0, band, width, height - band));
    }
}

/// Plain text of a frame: one newline-terminated line per row
pub fn frame_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let capacity = (usize::from(area.width) + 1) * usize::from(area.height);
    let mut out = String::with_capacity(capacity);

    for y in 0..area.height {
        let mut skip = 0usize;
        for x in 0..area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if let Some(cell) = buffer.cell((area.x + x, area.y + y)) {
                let symbol = cell.symbol();
                skip = symbol.width().saturating_sub(1);
                out.push_str(symbol);
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Brush;
    use crate::toolbar::{Category, Toolbar};
    use ratatui::style::Color;

    fn easel(width: u16, height: u16) -> Easel {
        Easel::new((width, height), Toolbar::default(), Brush::default())
    }

    #[test]
    fn test_toolbar_above_canvas() {
        let mut easel = easel(80, 24);
        easel
            .canvas_mut()
            .paint_glyph(0, 3, "#", Color::Rgb(255, 0, 0));
        let mut renderer = Renderer::new(false);

        let frame = renderer.render(&easel);
        let text = frame_text(frame.buffer);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 24);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[4].starts_with('└'));
        assert_eq!(lines[5], format!("   #{}", " ".repeat(76)));
        assert_eq!(
            frame.buffer.cell((3, 5)).map(|c| c.fg),
            Some(Color::Rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_returned_layout_matches_drawn_strip() {
        let easel = easel(100, 30);
        let mut renderer = Renderer::new(false);

        let frame = renderer.render(&easel);
        let row = frame.layout.row();

        for x in frame.layout.offsets(Category::Strokes) {
            let cell = frame.buffer.cell((x, row)).unwrap();
            assert_ne!(cell.symbol(), " ");
            assert_eq!(cell.bg, TOOLBAR_BG);
        }
    }

    #[test]
    fn test_narrow_strip_keeps_toolbar_border() {
        let mut renderer = Renderer::new(true);

        for width in [67u16, 66, 40] {
            let easel = easel(width, 12);
            let frame = renderer.render(&easel);

            for y in 1..4 {
                let left = frame.buffer.cell((0, y)).unwrap();
                let right = frame.buffer.cell((width - 1, y)).unwrap();
                assert_eq!(left.symbol(), "│", "width {width} row {y}");
                assert_eq!(right.symbol(), "│", "width {width} row {y}");
            }
        }
    }

    #[test]
    fn test_resize_between_frames() {
        let mut easel = easel(80, 24);
        let mut renderer = Renderer::new(false);
        renderer.render(&easel);

        easel.resize(40, 10);
        let frame = renderer.render(&easel);

        assert_eq!(frame.buffer.area, Rect::new(0, 0, 40, 10));
        assert_eq!(frame_text(frame.buffer).lines().count(), 10);
    }

    #[test]
    fn test_cleared_canvas_leaves_no_trace() {
        let mut easel = easel(20, 10);
        easel.canvas_mut().paint_glyph(2, 2, "#", Color::Reset);
        let mut renderer = Renderer::new(false);
        renderer.render(&easel);

        easel.clear();
        let frame = renderer.render(&easel);

        let text = frame_text(frame.buffer);
        assert!(text.lines().skip(5).all(|line| !line.contains('#')));
    }

    #[test]
    fn test_zero_size_terminal() {
        let easel = easel(0, 24);
        let mut renderer = Renderer::new(false);

        let frame = renderer.render(&easel);

        assert!(frame.layout.hitboxes().is_empty());
        assert_eq!(frame_text(frame.buffer), "\n".repeat(24));
    }

    #[test]
    fn test_terminal_shorter_than_toolbar() {
        let easel = easel(80, 3);
        let mut renderer = Renderer::new(false);

        let frame = renderer.render(&easel);

        assert_eq!(frame.buffer.area.height, 3);
    }
}
