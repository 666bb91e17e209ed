use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.compression_level(), DEFAULT_COMPRESSION_LEVEL);
}

#[test]
fn reads_pack_table() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[pack]
output = "/tmp/packs/out.zip"
compression_level = 3
license = "CC0-1.0"
"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.pack.output, Some(PathBuf::from("/tmp/packs/out.zip")));
    assert_eq!(settings.compression_level(), 3);
    assert_eq!(settings.pack.license.as_deref(), Some("CC0-1.0"));
}

#[test]
fn unknown_tables_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[other]\nkey = 1\n").unwrap();

    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[pack\noutput = ").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn output_resolution_priority() {
    let mut settings = Settings::default();
    assert_eq!(resolve_output_path(None, &settings), PathBuf::from(DEFAULT_OUTPUT));

    settings.pack.output = Some(PathBuf::from("from-settings.zip"));
    assert_eq!(
        resolve_output_path(None, &settings),
        PathBuf::from("from-settings.zip")
    );
    assert_eq!(
        resolve_output_path(Some(PathBuf::from("cli.zip")), &settings),
        PathBuf::from("cli.zip")
    );
}

#[test]
fn settings_path_ends_with_app_dir() {
    let path = settings_path();
    assert!(path.ends_with("emoji-pack/settings.toml"));
}

#[test]
fn display_string_round_trips() {
    let settings = Settings {
        pack: PackSettings {
            output: None,
            compression_level: Some(5),
            license: Some("MIT".to_string()),
        },
    };
    let text = settings_to_string(&settings);
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
