//! Theme and Colors
//!
//! The easel's fixed palette: the toolbar swatches, the keyboard shortcut
//! colors, and the chrome around the toolbar band.

use ratatui::style::Color;

// ============================================================================
// Swatch Palette
// ============================================================================

/// First toolbar swatch - pure red
pub const SWATCH_RED: Color = Color::Rgb(255, 0, 0);

/// Second toolbar swatch - pure blue
pub const SWATCH_BLUE: Color = Color::Rgb(0, 0, 255);

/// Third toolbar swatch - pure green
pub const SWATCH_GREEN: Color = Color::Rgb(0, 255, 0);

// ============================================================================
// Shortcut Colors
// ============================================================================

/// Brush color bound to `r`
pub const BRUSH_RED: Color = Color::Rgb(255, 0, 0);

/// Brush color bound to `w`
pub const BRUSH_WHITE: Color = Color::Rgb(255, 255, 255);

/// Brush color before anything is selected (terminal default foreground)
pub const BRUSH_DEFAULT: Color = Color::Reset;

// ============================================================================
// Toolbar Chrome
// ============================================================================

/// Toolbar band fill - slate gray
pub const TOOLBAR_BG: Color = Color::Rgb(72, 83, 86);

/// Toolbar border
pub const TOOLBAR_BORDER: Color = Color::Rgb(160, 160, 160);

/// Hitbox debug markers
pub const HITBOX_MARKER: Color = Color::Yellow;

/// Format a color as `#rrggbb` when it is an RGB value.
pub fn hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}
