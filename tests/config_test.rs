//! Tests for loading the UI configuration from disk.

use std::io::Write;
use tictactoe_rewind::{Direction, UiConfig};

#[test]
fn test_load_without_path_uses_defaults() {
    let config = UiConfig::load(None).unwrap();
    assert_eq!(config, UiConfig::default());
    assert_eq!(config.direction(), Direction::Forward);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "start_reversed = true").unwrap();
    writeln!(file, "show_coordinates = false").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let config = UiConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.direction(), Direction::Reversed);
    assert!(!*config.show_coordinates());
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
