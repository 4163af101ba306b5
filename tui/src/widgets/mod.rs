//! Widgets
//!
//! Ratatui widgets that draw easel state into a buffer.

mod canvas_view;
mod swatch_strip;

pub use canvas_view::CanvasView;
pub use swatch_strip::SwatchStrip;
