//! Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A toolbar color is not a color ratatui understands
    #[error("invalid color {value:?} in toolbar.colors")]
    Color {
        /// The offending value
        value: String,
    },

    /// A value is outside what the easel can work with
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
