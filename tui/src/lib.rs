//! Easel TUI - Mouse-driven character canvas for the terminal
//!
//! A toolbar band at the top offers colors, stroke glyphs, and stroke
//! widths; dragging the mouse below it paints the current brush into a
//! character grid.
//!
//! # Architecture
//!
//! - **Canvas**: Grid of glyph/color cells with a terminator per row
//! - **Toolbar**: Swatch categories and the per-frame layout that is both
//!   drawn and hit-tested
//! - **Dispatcher**: Press/drag/release state machine
//! - **Compositor**: Layered rendering of toolbar band over canvas
//! - **Config**: TOML file, `EASEL_*` environment, command line

pub mod app;
pub mod brush;
pub mod canvas;
pub mod compositor;
pub mod config;
pub mod dispatcher;
pub mod easel;
pub mod error;
pub mod input;
pub mod render;
pub mod theme;
pub mod toolbar;
pub mod widgets;

pub use app::App;
pub use config::Config;
