//! Errors surfaced by the `neumorph` binary.

use neumorph_widgets::ConfigError;
use thiserror::Error;

/// Anything that stops a render from reaching stdout.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
