//! Configuration loading tests.

use std::path::PathBuf;
use tictactoe_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.confirm_quit());
    assert!(*config.prompt_play_again());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictactoe.toml");
    std::fs::write(&path, "confirm_quit = false\nlog_filter = \"debug\"\n").unwrap();

    let config = TuiConfig::load(&path).unwrap();
    assert!(!*config.confirm_quit());
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.prompt_play_again());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "confirm_quit = \"maybe\"").unwrap();

    let err = TuiConfig::load(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_log_file_overrides() {
    let config = TuiConfig::default().with_log_file(Some(PathBuf::from("/tmp/ttt.log")));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));

    let unchanged = TuiConfig::default().with_log_file(None);
    assert_eq!(unchanged.log_file(), &PathBuf::from("tictactoe.log"));
}
