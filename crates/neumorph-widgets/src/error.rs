//! Error types for neumorph-widgets.

use neumorph_core::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a toggle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color field holds something other than a hex color.
    #[error("invalid color in `{field}`: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },
}
