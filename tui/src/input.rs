//! Input Events
//!
//! Terminal events reduced to what the easel reacts to: a mouse position
//! with press/release/motion, a key, or a new terminal size.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Mouse button lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    Press,
    Release,
    Motion,
}

/// A key the easel may care about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    CtrlC,
    Other,
}

/// A normalized input event, in terminal cell coordinates (origin top-left)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Mouse { x: u16, y: u16, action: MouseAction },
    Key(KeyInput),
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Convert a crossterm event, dropping the kinds the easel ignores
    /// (scrolling, focus, paste, key release/repeat)
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key.into())),
            Event::Mouse(mouse) => {
                let action = match mouse.kind {
                    MouseEventKind::Down(_) => MouseAction::Press,
                    MouseEventKind::Up(_) => MouseAction::Release,
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Motion,
                    _ => return None,
                };
                Some(Self::Mouse {
                    x: mouse.column,
                    y: mouse.row,
                    action,
                })
            }
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::CtrlC,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Self::Char(c),
            _ => Self::Other,
        }
    }
}
