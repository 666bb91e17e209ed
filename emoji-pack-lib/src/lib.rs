//! Filesystem side of emoji packing: scanning image folders, writing the
//! zip archive, and user settings.
//!
//! Naming and alias logic lives in `emoji-pack-core` and is re-exported
//! here so frontends only need this crate.

pub mod archive;
pub mod error;
pub mod progress;
pub mod scanner;
pub mod settings;

pub use archive::{ArchiveOptions, ArchiveSummary, DEFAULT_COMPRESSION_LEVEL, create_emoji_zip};
pub use error::{PackError, SettingsError};
pub use progress::ArchiveProgress;
pub use scanner::{IMAGE_EXTENSIONS, is_image, scan_emoji_files};
pub use settings::{Settings, load_settings, resolve_output_path, settings_path};

pub use emoji_pack_core::*;
