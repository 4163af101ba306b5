//! Toolbar Layout & Hit-Test
//!
//! A single pass over the toolbar's categories produces both the tokens
//! that get drawn and the column where every swatch starts. Drawing and
//! hit-testing read the same value, so a press can only ever resolve to
//! a swatch that was actually on screen at that column.
//!
//! The strip is centered: `origin = floor((terminal_width - strip_width) / 2)`.
//! A strip wider than the terminal gets a negative origin and is clipped
//! to the columns inside the band's frame; swatches outside them get no
//! hitbox.

use std::ops::Range;

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use super::{
    Category, Swatch, SwatchValue, Toolbar, BORDER, COLOR_GLYPH, INTER_PADDING, PADDING,
};

/// Columns of slack on either side of a hitbox
pub const HIT_TOLERANCE: u16 = 1;

/// One run of text in the strip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Foreground override, `None` for toolbar default
    pub color: Option<Color>,
    /// Terminal column of the first cell (may be negative when clipped)
    pub x: i32,
}

/// Where a swatch was drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub swatch: Swatch,
    /// Terminal column the swatch glyph starts at
    pub x: u16,
    /// Display width of the swatch glyph
    pub width: u16,
}

/// The laid-out strip for one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarLayout {
    tokens: Vec<Token>,
    hitboxes: Vec<Hitbox>,
    strip_width: usize,
    origin: i32,
    row: u16,
    columns: Range<u16>,
}

/// Accumulates tokens at strip-relative offsets
#[derive(Default)]
struct Pass {
    cursor: usize,
    tokens: Vec<(String, Option<Color>, usize)>,
    swatches: Vec<(Swatch, usize, usize)>,
}

impl Pass {
    fn push(&mut self, text: &str, color: Option<Color>) {
        self.tokens.push((text.to_string(), color, self.cursor));
        self.cursor += text.width();
    }

    fn push_swatch(&mut self, text: &str, color: Option<Color>, swatch: Swatch) {
        self.swatches.push((swatch, self.cursor, text.width()));
        self.push(text, color);
    }
}

impl ToolbarLayout {
    pub(super) fn build(toolbar: &Toolbar, terminal_width: u16) -> Self {
        let mut pass = Pass::default();

        pass.push(PADDING, None);
        for (index, color) in toolbar.colors.iter().enumerate() {
            let swatch = Swatch {
                category: Category::Colors,
                index,
            };
            pass.push_swatch(COLOR_GLYPH, Some(*color), swatch);
            pass.push(INTER_PADDING, None);
        }

        let separator = PADDING.repeat(2);
        for category in [Category::Strokes, Category::Widths] {
            pass.push(&separator, None);
            for index in 0..toolbar.len(category) {
                let swatch = Swatch { category, index };
                let text = match toolbar.value(swatch) {
                    Some(SwatchValue::Stroke(text) | SwatchValue::Width(text)) => text,
                    _ => continue,
                };
                pass.push(INTER_PADDING, None);
                pass.push_swatch(text, None, swatch);
            }
        }
        pass.push(PADDING, None);

        let strip_width = pass.cursor;
        let origin = (i64::from(terminal_width) - strip_width as i64).div_euclid(2);
        let origin = i32::try_from(origin).unwrap_or(i32::MIN);

        let tokens = pass
            .tokens
            .into_iter()
            .map(|(text, color, offset)| Token {
                text,
                color,
                x: origin.saturating_add(offset as i32),
            })
            .collect();

        let right = terminal_width.saturating_sub(BORDER);
        let columns = BORDER.min(right)..right;

        let hitboxes = pass
            .swatches
            .into_iter()
            .filter_map(|(swatch, offset, width)| {
                let x = i64::from(origin) + offset as i64;
                let fits = x >= i64::from(columns.start) && x + width as i64 <= i64::from(right);
                fits.then(|| Hitbox {
                    swatch,
                    x: x as u16,
                    width: width as u16,
                })
            })
            .collect();

        Self {
            tokens,
            hitboxes,
            strip_width,
            origin,
            row: toolbar.selectable_row(),
            columns,
        }
    }

    /// Resolve a press at terminal (`x`, `y`) to the swatch drawn there
    pub fn hit(&self, x: u16, y: u16) -> Option<Swatch> {
        if y != self.row {
            return None;
        }
        self.hitboxes
            .iter()
            .find(|hb| x.abs_diff(hb.x) <= HIT_TOLERANCE)
            .map(|hb| hb.swatch)
    }

    /// Start columns of every visible swatch in a category, in order
    pub fn offsets(&self, category: Category) -> Vec<u16> {
        self.hitboxes
            .iter()
            .filter(|hb| hb.swatch.category == category)
            .map(|hb| hb.x)
            .collect()
    }

    /// The strip as one line of text, before centering
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    /// Display width of the whole strip
    pub fn strip_width(&self) -> usize {
        self.strip_width
    }

    /// Terminal column the strip starts at
    pub fn origin(&self) -> i32 {
        self.origin
    }

    /// Toolbar-relative row the strip is drawn on
    pub fn row(&self) -> u16 {
        self.row
    }

    /// Terminal columns the strip may draw into, inside the band's frame
    pub fn columns(&self) -> Range<u16> {
        self.columns.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SWATCH_BLUE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_text() {
        let layout = Toolbar::default().layout(80);

        assert_eq!(
            layout.text(),
            "    ⬤   ⬤   ⬤              #   .   -   █           ◼   ◼◼   ◼◼◼    "
        );
        assert_eq!(layout.strip_width(), 67);
    }

    #[test]
    fn test_centered_offsets_80_columns() {
        let layout = Toolbar::default().layout(80);

        assert_eq!(layout.origin(), 6);
        assert_eq!(layout.offsets(Category::Colors), vec![10, 14, 18]);
        assert_eq!(layout.offsets(Category::Strokes), vec![33, 37, 41, 45]);
        assert_eq!(layout.offsets(Category::Widths), vec![57, 61, 66]);
    }

    #[test]
    fn test_first_swatch_matches_centering_formula() {
        let toolbar = Toolbar::default();
        for width in [67u16, 70, 80, 81, 120, 200] {
            let layout = toolbar.layout(width);
            let expected =
                (f64::from(width) / 2.0 - layout.strip_width() as f64 / 2.0).floor() as i64
                    + PADDING.len() as i64;
            assert_eq!(
                i64::from(layout.offsets(Category::Colors)[0]),
                expected,
                "width {width}"
            );
        }
    }

    #[test]
    fn test_hitboxes_sit_on_their_tokens() {
        let toolbar = Toolbar::default();
        let layout = toolbar.layout(100);

        for hb in layout.hitboxes() {
            let token = layout
                .tokens()
                .iter()
                .find(|t| t.x == i32::from(hb.x) && !t.text.trim().is_empty())
                .unwrap();
            match toolbar.value(hb.swatch).unwrap() {
                SwatchValue::Color(color) => {
                    assert_eq!(token.text, COLOR_GLYPH);
                    assert_eq!(token.color, Some(color));
                }
                SwatchValue::Stroke(text) | SwatchValue::Width(text) => {
                    assert_eq!(token.text, text)
                }
            }
        }
    }

    #[test]
    fn test_press_within_tolerance_selects_exactly_one() {
        let layout = Toolbar::default().layout(80);

        for hb in layout.hitboxes() {
            for dx in [-1i32, 0, 1] {
                let x = (i32::from(hb.x) + dx) as u16;
                let matches: Vec<_> = layout
                    .hitboxes()
                    .iter()
                    .filter(|other| x.abs_diff(other.x) <= HIT_TOLERANCE)
                    .collect();
                assert_eq!(matches.len(), 1, "x {x}");
                assert_eq!(layout.hit(x, layout.row()), Some(hb.swatch));
            }
        }
    }

    #[test]
    fn test_press_off_row_or_between_swatches_misses() {
        let layout = Toolbar::default().layout(80);

        assert_eq!(layout.hit(14, 0), None);
        assert_eq!(layout.hit(14, 2), None);
        assert_eq!(layout.hit(12, 1), None);
        assert_eq!(layout.hit(0, 1), None);
        assert_eq!(layout.hit(79, 1), None);
    }

    #[test]
    fn test_second_color_swatch() {
        let toolbar = Toolbar::default();
        let layout = toolbar.layout(80);

        let swatch = layout.hit(15, 1).unwrap();
        assert_eq!(toolbar.value(swatch), Some(SwatchValue::Color(SWATCH_BLUE)));
    }

    #[test]
    fn test_narrow_terminal_drops_clipped_swatches() {
        let layout = Toolbar::default().layout(40);

        assert!(layout.origin() < 0);
        for hb in layout.hitboxes() {
            assert!(hb.x + hb.width <= 40);
        }
        assert!(layout.hitboxes().len() < 10);
    }

    #[test]
    fn test_hitboxes_stay_inside_frame() {
        let toolbar = Toolbar::default();
        for width in 1u16..=80 {
            let layout = toolbar.layout(width);
            let columns = layout.columns();
            for hb in layout.hitboxes() {
                assert!(hb.x >= columns.start, "width {width}");
                assert!(hb.x + hb.width <= columns.end, "width {width}");
                assert!(hb.x >= BORDER && hb.x + hb.width < width, "width {width}");
            }
        }
        assert_eq!(toolbar.layout(80).columns(), 1..79);
    }

    #[test]
    fn test_zero_width_terminal_has_no_hitboxes() {
        let layout = Toolbar::default().layout(0);
        assert!(layout.hitboxes().is_empty());
        assert!(layout.columns().is_empty());
        assert_eq!(layout.hit(0, layout.row()), None);
    }
}
