use thiserror::Error;

use emoji_pack_lib::{PackError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Scanning or packaging failed
    #[error("{0}")]
    Pack(#[from] PackError),

    /// Settings file could not be read
    #[error("Config error: {0}")]
    Config(#[from] SettingsError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
