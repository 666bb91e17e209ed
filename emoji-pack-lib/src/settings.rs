//! User settings (default output path, compression, license).
//!
//! The settings file is `~/.config/emoji-pack/settings.toml`:
//!
//! ```toml
//! [pack]
//! output = "/home/me/packs/emoji-pack.zip"
//! compression_level = 6
//! license = "CC0-1.0"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::archive::DEFAULT_COMPRESSION_LEVEL;
use crate::error::SettingsError;

/// Output file used when neither the command line nor settings name one.
pub const DEFAULT_OUTPUT: &str = "emoji-pack.zip";

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub pack: PackSettings,
}

/// The `[pack]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Settings {
    /// Compression level from settings, or the default.
    pub fn compression_level(&self) -> i64 {
        self.pack
            .compression_level
            .unwrap_or(DEFAULT_COMPRESSION_LEVEL)
    }
}

/// Canonical path to the settings file: `~/.config/emoji-pack/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("emoji-pack").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the output archive path using a priority chain:
///
/// 1. CLI argument (if `Some`)
/// 2. `pack.output` in `settings.toml`
/// 3. [`DEFAULT_OUTPUT`] in the current directory
pub fn resolve_output_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.pack.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

/// Pretty-printed TOML of the effective settings, for display.
pub fn settings_to_string(settings: &Settings) -> String {
    toml::to_string_pretty(settings).unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
