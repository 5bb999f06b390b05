//! Tests for loading game settings from disk.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use unbeatable::GameConfig;
use unbeatable_tictactoe::{Minimax, Objective};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file(
        r#"
dimensions = 4
thinking_delay_ms = 500
max_depth = 3
alpha_beta = true
objective = "concede"
computer_first = true
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.dimensions(), 4);
    assert_eq!(config.thinking_delay(), Duration::from_millis(500));
    assert!(*config.computer_first());
    assert_eq!(
        config.searcher(),
        Minimax::new()
            .with_max_depth(Some(3))
            .with_alpha_beta(true)
            .with_objective(Objective::Concede)
    );
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = config_file("");
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_invalid_values_rejected() {
    let file = config_file("dimensions = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("dimensions"));

    let file = config_file("objective = \"lose\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_large_board_file_needs_depth_limit() {
    let file = config_file("dimensions = 5\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("max_depth"));

    let file = config_file("dimensions = 5\nmax_depth = 2\n");
    assert_eq!(*GameConfig::from_file(file.path()).unwrap().dimensions(), 5);
}
