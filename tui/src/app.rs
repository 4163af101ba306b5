//! Main Application
//!
//! The App struct owns the easel and drives it from terminal events:
//! - Event loop (keyboard, mouse, resize), one event at a time
//! - Dispatcher for the press/drag/release state machine
//! - Renderer for the full frame after every event
//!
//! The toolbar layout of the frame on screen is kept only until the next
//! event has been dispatched against it; the following render replaces it.

use std::io;

use anyhow::Context;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::Config;
use crate::dispatcher::{Control, Dispatcher};
use crate::easel::Easel;
use crate::error::ConfigError;
use crate::input::InputEvent;
use crate::render::{frame_text, Renderer};
use crate::toolbar::ToolbarLayout;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Canvas, brush, and toolbar
    easel: Easel,
    /// Press/drag/release tracking
    dispatcher: Dispatcher,
    /// Frame composer
    renderer: Renderer,
    /// Layout of the frame currently on screen
    on_screen: Option<ToolbarLayout>,
}

impl App {
    /// Create an App for a terminal of `size` (columns, rows)
    pub fn new(size: (u16, u16), config: &Config) -> Result<Self, ConfigError> {
        let toolbar = config.build_toolbar()?;
        let easel = Easel::new(size, toolbar, config.build_brush());

        tracing::info!(
            columns = size.0,
            rows = size.1,
            canvas_width = easel.canvas().width(),
            canvas_height = easel.canvas().height(),
            "easel ready"
        );

        Ok(Self {
            running: true,
            easel,
            dispatcher: Dispatcher::new(config.canvas.column_offset),
            renderer: Renderer::new(config.toolbar.show_hitboxes),
            on_screen: None,
        })
    }

    /// Main event loop.
    ///
    /// Renders once up front, then once after every event, until the quit
    /// key arrives or `events` ends.
    pub async fn run<B, S>(&mut self, terminal: &mut Terminal<B>, mut events: S) -> anyhow::Result<()>
    where
        B: Backend,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.render(terminal)?;

        while self.running {
            let Some(event) = events.next().await else {
                tracing::debug!("event stream ended");
                break;
            };
            let event = event.context("failed to read terminal event")?;

            let Some(input) = InputEvent::from_crossterm(event) else {
                continue;
            };
            if self.handle(input) == Control::Quit {
                self.running = false;
                break;
            }

            self.render(terminal)?;
        }

        Ok(())
    }

    /// Dispatch one event against the layout currently on screen
    pub fn handle(&mut self, input: InputEvent) -> Control {
        let layout = match self.on_screen.take() {
            Some(layout) => layout,
            None => self.easel.toolbar().layout(self.easel.size().0),
        };
        self.dispatcher.dispatch(&mut self.easel, &layout, input)
    }

    /// Render the UI
    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let frame = self.renderer.render(&self.easel);
        let output = frame.buffer;

        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    if let (Some(src), Some(dst)) = (output.cell((x, y)), buf.cell_mut((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
        })?;

        self.on_screen = Some(frame.layout);
        Ok(())
    }

    /// Plain text of the current frame, toolbar included
    pub fn frame_text(&mut self) -> String {
        let frame = self.renderer.render(&self.easel);
        frame_text(frame.buffer)
    }

    pub fn easel(&self) -> &Easel {
        &self.easel
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
