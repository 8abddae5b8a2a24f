//! Error types for the relay bot.
//!
//! [`RelayError`] is the top-level error; configuration problems are [`ConfigError`].

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error (bot transport, config, shutdown, logging, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Shutdown error: {0}")]
    Shutdown(String),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
