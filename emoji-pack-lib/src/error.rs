use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning inputs or writing a pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// I/O error while reading sources or writing the archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip container error
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// `meta.json` serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input path is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The scan found no image files at all
    #[error("No emoji files found in {}", .0.display())]
    NoInputFound(PathBuf),

    /// Invalid archive option
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl PackError {
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }
}

/// Errors reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
