use crate::conf::{AnalyzerConfig, CONFIG_FILE_NAME, ConfigError, load_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn defaults_match_documented_values() {
    // Act
    let cfg = AnalyzerConfig::default();

    // Assert
    assert_eq!(cfg.access_log_path, PathBuf::from("access.log"));
    assert_eq!(cfg.error_log_path, PathBuf::from("error.log"));
    assert_eq!(cfg.top_n, 10);
    assert!(cfg.device_breakdown);
}

#[test]
fn loads_full_config_and_resolves_relative_paths() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join(CONFIG_FILE_NAME),
        r#"
access_log_path  = "logs/access.log"
error_log_path   = "/var/log/apache2/error.log"
top_n            = 5
device_breakdown = false
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(root).unwrap();

    // Assert
    assert_eq!(
        cfg,
        AnalyzerConfig {
            access_log_path: root.join("logs/access.log"),
            error_log_path: PathBuf::from("/var/log/apache2/error.log"),
            top_n: 5,
            device_breakdown: false,
        }
    );
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let file = dir.path().join("custom.hcl");
    fs::write(&file, "top_n = 3\n").unwrap();

    // Act
    let cfg = load_config(&file).unwrap();

    // Assert
    assert_eq!(cfg.top_n, 3);
    assert_eq!(cfg.access_log_path, dir.path().join("access.log"));
    assert_eq!(cfg.error_log_path, dir.path().join("error.log"));
}

#[test]
fn zero_top_n_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "top_n = 0\n").unwrap();

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidTopN));
}

#[test]
fn unknown_keys_are_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "pdf_out = \"report.pdf\"\n").unwrap();

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    match err {
        ConfigError::ReadFile { path, .. } => {
            assert_eq!(path, dir.path().join(CONFIG_FILE_NAME))
        }
        other => panic!("Expected ReadFile, got {:?}", other),
    }
}
