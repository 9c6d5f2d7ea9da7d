//! Common test utilities for integration tests.

use std::fs::File;
use std::path::PathBuf;

use fileselection::format::read_selection;
use fileselection::{Result, Selection};

/// Path of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture as if it were a data file, rooted at the fixtures directory.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Result<Selection> {
    let path = fixture_path(name);
    let file = File::open(&path).expect("fixture should exist");
    read_selection(file, &path)
}

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}
