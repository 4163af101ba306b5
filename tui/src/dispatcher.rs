//! Input Dispatcher
//!
//! Routes each input event to the toolbar or the canvas and tracks the
//! press/drag/release lifecycle.
//!
//! ```text
//!            press (below toolbar)
//!   Idle ─────────────────────────▶ Dragging ──┐ motion (below toolbar):
//!    ▲                                 │  ▲    │ paint one cell
//!    └──────────── release ────────────┘  └────┘
//! ```
//!
//! A bare press does not paint; only motion while dragging does.
//! Keyboard shortcuts act independently of the drag state.

use crate::brush::{BLOCK_GLYPH, ERASER_GLYPH};
use crate::easel::Easel;
use crate::input::{InputEvent, KeyInput, MouseAction};
use crate::theme::{BRUSH_RED, BRUSH_WHITE};
use crate::toolbar::ToolbarLayout;

/// Paint state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintState {
    #[default]
    Idle,
    Dragging,
}

/// What the host loop should do after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Press/drag/release tracking plus the canvas column offset
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    state: PaintState,
    /// Last observed pointer position
    pointer: Option<(u16, u16)>,
    /// Columns subtracted from a pointer x to get a canvas column
    column_offset: u16,
}

impl Dispatcher {
    pub fn new(column_offset: u16) -> Self {
        Self {
            column_offset,
            ..Self::default()
        }
    }

    /// Process one event against `easel`.
    ///
    /// `layout` must be the toolbar layout of the frame currently on
    /// screen; presses in the toolbar band are resolved against it.
    pub fn dispatch(
        &mut self,
        easel: &mut Easel,
        layout: &ToolbarLayout,
        event: InputEvent,
    ) -> Control {
        match event {
            InputEvent::Mouse { x, y, action } => {
                self.pointer = Some((x, y));
                self.handle_mouse(easel, layout, x, y, action);
                Control::Continue
            }
            InputEvent::Key(key) => self.handle_key(easel, key),
            InputEvent::Resize { width, height } => {
                // The drag state survives: later paints are bounds-checked
                // against the new grid.
                easel.resize(width, height);
                Control::Continue
            }
        }
    }

    fn handle_mouse(
        &mut self,
        easel: &mut Easel,
        layout: &ToolbarLayout,
        x: u16,
        y: u16,
        action: MouseAction,
    ) {
        let in_toolbar = easel.toolbar().contains_row(y);

        match action {
            MouseAction::Press if in_toolbar => match layout.hit(x, y) {
                Some(swatch) => {
                    tracing::trace!(
                        x,
                        y,
                        category = swatch.category.name(),
                        index = swatch.index,
                        "toolbar hit"
                    );
                    easel.select(swatch);
                }
                None => tracing::trace!(x, y, "toolbar press missed every swatch"),
            },
            MouseAction::Press => self.state = PaintState::Dragging,
            MouseAction::Motion if self.state == PaintState::Dragging && !in_toolbar => {
                self.paint_at(easel, x, y);
            }
            MouseAction::Motion => {}
            MouseAction::Release => self.state = PaintState::Idle,
        }
    }

    /// Translate terminal coordinates to a canvas cell and paint it
    fn paint_at(&self, easel: &mut Easel, x: u16, y: u16) {
        let Some(row) = y.checked_sub(easel.toolbar().height()) else {
            return;
        };
        let Some(col) = x.checked_sub(self.column_offset) else {
            return;
        };

        let cell = easel.brush().cell();
        easel
            .canvas_mut()
            .paint(usize::from(row), usize::from(col), cell);
    }

    fn handle_key(&mut self, easel: &mut Easel, key: KeyInput) -> Control {
        match key {
            KeyInput::CtrlC => {
                tracing::info!("quit requested");
                return Control::Quit;
            }
            KeyInput::Char('r') => easel.brush_mut().set_color(BRUSH_RED),
            KeyInput::Char('w') => easel.brush_mut().set_color(BRUSH_WHITE),
            KeyInput::Char('e') => easel.brush_mut().set_glyph(ERASER_GLYPH),
            KeyInput::Char('b') => easel.brush_mut().set_glyph(BLOCK_GLYPH),
            KeyInput::Char('c') => {
                tracing::debug!("canvas cleared");
                easel.clear();
            }
            KeyInput::Char(_) | KeyInput::Other => {}
        }
        Control::Continue
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Last pointer position seen, if any
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }
}
