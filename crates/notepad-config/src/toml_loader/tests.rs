//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_notepad_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, notepad_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[editor]
font_size = 16

[assistant]
trigger_scope = "line"
max_in_flight = 2
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.editor.font_size, 16);
    assert_eq!(
        config.assistant.trigger_scope,
        crate::schema::TriggerScope::Line
    );
    assert_eq!(config.assistant.max_in_flight, 2);
    // Defaults preserved
    assert_eq!(config.window.width, 600);
    assert_eq!(config.keybinds.ask_assistant, "Ctrl+Enter");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, notepad_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor]\nfont_size = 100\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.editor.font_size, 100);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.assistant.enabled);
    assert_eq!(config.window.title_suffix, "Notepad");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::NotepadConfig;

    let config: NotepadConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("notepad"));
        assert!(path_str.ends_with("config.toml"));
    }
}
