//! Configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config`, `$EASEL_CONFIG`, or
//!    `<config dir>/easel/config.toml` when present)
//! 3. `EASEL_*` environment variables
//! 4. command line flags
//!
//! ```toml
//! [toolbar]
//! height = 5
//! colors = ["#ff0000", "#0000ff", "#00ff00"]
//! strokes = ["#", ".", "-", "█"]
//! show_hitboxes = false
//!
//! [brush]
//! glyph = "#"
//!
//! [log]
//! file = "easel.log"
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::brush::{Brush, DEFAULT_GLYPH};
use crate::error::ConfigError;
use crate::theme::{self, SWATCH_BLUE, SWATCH_GREEN, SWATCH_RED};
use crate::toolbar::{self, Toolbar};

/// Top-level configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub toolbar: ToolbarConfig,
    pub brush: BrushConfig,
    pub canvas: CanvasConfig,
    pub log: LogConfig,
}

/// Toolbar band settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolbarConfig {
    /// Band height in rows
    pub height: u16,
    /// Color swatches, as `#rrggbb` or color names
    pub colors: Vec<String>,
    /// Stroke glyph swatches
    pub strokes: Vec<String>,
    /// Stroke width swatches
    pub widths: Vec<String>,
    /// Draw a `*` under every hitbox
    pub show_hitboxes: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            height: toolbar::DEFAULT_HEIGHT,
            colors: [SWATCH_RED, SWATCH_BLUE, SWATCH_GREEN]
                .into_iter()
                .filter_map(theme::hex)
                .collect(),
            strokes: toolbar::DEFAULT_STROKES.map(String::from).to_vec(),
            widths: toolbar::DEFAULT_WIDTHS.map(String::from).to_vec(),
            show_hitboxes: false,
        }
    }
}

/// Brush settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BrushConfig {
    /// Glyph painted until another is chosen
    pub glyph: String,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH.to_string(),
        }
    }
}

/// Canvas settings
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Columns subtracted from the pointer x before painting
    pub column_offset: u16,
}

/// Log output settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// File the log is written to, truncated at startup
    pub file: PathBuf,
    /// Level used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("easel.log"),
            level: "debug".to_string(),
        }
    }
}

/// Values given on the command line
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub toolbar_height: Option<u16>,
    pub glyph: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub show_hitboxes: bool,
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("easel").join("config.toml"))
    }

    /// Load from `path` if given (it must exist), otherwise from the
    /// default location if a file is there, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply `EASEL_*` environment variables
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides from `lookup`; unparsable values
    /// are ignored
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.toolbar.height = lookup("EASEL_TOOLBAR_HEIGHT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.toolbar.height);
        self.brush.glyph = lookup("EASEL_BRUSH")
            .filter(|v| !v.is_empty())
            .unwrap_or(self.brush.glyph);
        self.log.file = lookup("EASEL_LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(self.log.file);
        self.log.level = lookup("EASEL_LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or(self.log.level);
        self
    }

    /// Apply command line values
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(height) = overrides.toolbar_height {
            self.toolbar.height = height;
        }
        if let Some(glyph) = overrides.glyph {
            self.brush.glyph = glyph;
        }
        if let Some(file) = overrides.log_file {
            self.log.file = file;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        self.toolbar.show_hitboxes |= overrides.show_hitboxes;
        self
    }

    /// Check the values the easel cannot work without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toolbar.height < toolbar::MIN_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "toolbar.height must be at least {}, got {}",
                toolbar::MIN_HEIGHT,
                self.toolbar.height
            )));
        }
        if self.brush.glyph.is_empty() {
            return Err(ConfigError::Invalid("brush.glyph must not be empty".into()));
        }
        if self.brush.glyph.width() != 1 {
            return Err(ConfigError::Invalid(format!(
                "brush.glyph must be one column wide, got {:?}",
                self.brush.glyph
            )));
        }
        for (name, values) in [
            ("toolbar.colors", &self.toolbar.colors),
            ("toolbar.strokes", &self.toolbar.strokes),
            ("toolbar.widths", &self.toolbar.widths),
        ] {
            if values.is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
            if values.iter().any(String::is_empty) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not contain empty values"
                )));
            }
        }
        // Strokes become canvas cells; width markers are only labels
        if let Some(stroke) = self.toolbar.strokes.iter().find(|s| s.width() != 1) {
            return Err(ConfigError::Invalid(format!(
                "toolbar.strokes must be one column wide, got {stroke:?}"
            )));
        }
        self.colors().map(|_| ())
    }

    /// Parsed toolbar colors
    pub fn colors(&self) -> Result<Vec<Color>, ConfigError> {
        self.toolbar
            .colors
            .iter()
            .map(|value| {
                Color::from_str(value).map_err(|_| ConfigError::Color {
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Build the toolbar categories
    pub fn build_toolbar(&self) -> Result<Toolbar, ConfigError> {
        self.validate()?;
        Ok(Toolbar::new(
            self.colors()?,
            self.toolbar.strokes.clone(),
            self.toolbar.widths.clone(),
            self.toolbar.height,
        ))
    }

    /// The starting brush
    pub fn build_brush(&self) -> Brush {
        Brush::new(self.brush.glyph.clone())
    }
}
