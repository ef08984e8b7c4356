//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use resume_compare::ResponseEnvelope;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The sample envelope, normalized.
pub fn sample_envelope() -> ResponseEnvelope {
    ResponseEnvelope::from_json(&load_fixture("envelope.json")).expect("fixture is valid")
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, load_fixture(name)).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Write a config file under `home/.config/rcmp`.
pub fn write_config(home: &Path, contents: &str) -> PathBuf {
    let dir = home.join(".config").join("rcmp");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}
