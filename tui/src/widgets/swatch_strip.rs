//! SwatchStrip Widget
//!
//! Draws a [`ToolbarLayout`] on its selectable row, exactly at the columns
//! its hitboxes were recorded for. Nothing is drawn outside the layout's
//! columns, so the band's frame stays intact.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

use crate::theme::HITBOX_MARKER;
use crate::toolbar::ToolbarLayout;

/// The toolbar's swatch strip
pub struct SwatchStrip<'a> {
    layout: &'a ToolbarLayout,
    style: Style,
    show_hitboxes: bool,
}

impl<'a> SwatchStrip<'a> {
    pub fn new(layout: &'a ToolbarLayout) -> Self {
        Self {
            layout,
            style: Style::default(),
            show_hitboxes: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Mark every hitbox with a `*` on the row below the strip
    pub fn show_hitboxes(mut self, show: bool) -> Self {
        self.show_hitboxes = show;
        self
    }
}

impl Widget for SwatchStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row = self.layout.row();
        if row >= area.height {
            return;
        }
        let y = area.y + row;
        let columns = self.layout.columns();
        let left = i64::from(columns.start);
        let right = i64::from(columns.end.min(area.width));

        for token in self.layout.tokens() {
            let style = match token.color {
                Some(color) => self.style.fg(color),
                None => self.style,
            };

            let mut x = i64::from(token.x);
            for ch in token.text.chars() {
                let width = ch.width().unwrap_or(0) as i64;
                if x >= left && x + width <= right {
                    let mut glyph = [0u8; 4];
                    buf.set_stringn(
                        area.x + x as u16,
                        y,
                        ch.encode_utf8(&mut glyph),
                        width as usize,
                        style,
                    );
                }
                x += width;
            }
        }

        // Markers go on the row below, above the bottom frame row
        if self.show_hitboxes && row + 2 < area.height {
            let marker = self.style.fg(HITBOX_MARKER);
            for hitbox in self.layout.hitboxes() {
                if hitbox.x < area.width {
                    buf.set_string(area.x + hitbox.x, y + 1, "*", marker);
                }
            }
        }
    }
}
