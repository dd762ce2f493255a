//! Configuration file loading tests

use assert_matches::assert_matches;
use skilltree_core::{ConfigError, Identity, IndexConfig};
use std::io::Write;

#[test]
fn load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "controller = \"meta-colony\"\ncapacity_hint = 64\ntrack_descendants = true"
    )
    .unwrap();

    let config = IndexConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.controller, Identity::new("meta-colony"));
    assert_eq!(config.capacity_hint, 64);
    assert!(config.track_descendants);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = IndexConfig::load_from_file(&path).unwrap_err();
    assert_matches!(err, ConfigError::Io { ref path, .. } if path.ends_with("absent.toml"));
}

#[test]
fn config_survives_toml_rewrite() {
    let config = IndexConfig::with_controller("colony-b");
    let text = config.to_toml_string().unwrap();
    assert_eq!(IndexConfig::from_toml_str(&text).unwrap(), config);
}
