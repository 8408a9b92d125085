use thiserror::Error;

use showroom_config::ConfigError;
use showroom_core::CoreError;

/// Error type surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
    /// Rejected command line; the message already carries usage hints.
    #[error("{0}")]
    Cli(#[from] clap::Error),
}
