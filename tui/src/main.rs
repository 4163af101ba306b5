//! Easel Entry Point
//!
//! Usage:
//!   easel [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>           Config file (default: <config dir>/easel/config.toml)
//!       --toolbar-height <ROWS>   Toolbar band height
//!   -b, --brush <GLYPH>           Starting brush glyph
//!       --log-file <PATH>         Log file, truncated at startup (default: easel.log)
//!   -l, --log-level <LEVEL>       Log level when RUST_LOG is unset (default: debug)
//!       --show-hitboxes           Mark every swatch hitbox under the strip
//!
//! Keys: r/w pick red/white, e erases, b picks the block glyph, c clears,
//! Ctrl-C quits.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use easel_tui::config::Overrides;
use easel_tui::{App, Config};

/// Easel - paint with the mouse in your terminal
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "EASEL_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Toolbar band height in rows
    #[arg(long, value_name = "ROWS")]
    toolbar_height: Option<u16>,

    /// Starting brush glyph
    #[arg(short = 'b', long, value_name = "GLYPH")]
    brush: Option<String>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Draw a marker under every swatch hitbox
    #[arg(long)]
    show_hitboxes: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            toolbar_height: self.toolbar_height,
            glyph: self.brush.clone(),
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
            show_hitboxes: self.show_hitboxes,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_env()
        .with_overrides(args.overrides());
    config.validate().context("invalid configuration")?;

    init_logging(&config.log.file, &config.log.level)?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("easel requires a terminal (TTY)");
        std::process::exit(1);
    }

    let size = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut app = App::new(size, &config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to set up terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = app.run(&mut terminal, EventStream::new()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!("easel closed");
    result
}

/// Log to `path`, never to the terminal the canvas owns
fn init_logging(path: &Path, level: &str) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("easel_tui={level},easel={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(())
}
