use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emoji_pack_lib::settings::{self, settings_to_string};

use crate::error::CliError;

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "emoji-pack settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = settings::load_settings()?;
    log::info!(
        "  Output:            {}",
        settings::resolve_output_path(None, &settings).display(),
    );
    log::info!("  Compression level: {}", settings.compression_level());
    log::info!(
        "  License:           {}",
        settings.pack.license.as_deref().unwrap_or("(none)"),
    );

    log::debug!("Effective settings:\n{}", settings_to_string(&settings));

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
