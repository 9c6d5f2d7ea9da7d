//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated configuration directory

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated selection folder.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Folder the selection lives in
    pub folder: PathBuf,
    /// Configuration directory (empty unless a test writes to it)
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        // The binary sees the canonical CWD, so compare against that form
        let base = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let folder = base.join("data");
        let config_dir = base.join("config");
        fs::create_dir_all(&folder).expect("Failed to create data folder");
        fs::create_dir_all(&config_dir).expect("Failed to create config folder");

        Self {
            temp_dir,
            folder,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// `FILESELECTION_*` variables from the outer environment are cleared so
    /// they cannot leak into the test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("fileselection").expect("Failed to find binary");
        for var in [
            "FILESELECTION_DIR",
            "FILESELECTION_CONFIG_DIR",
            "FILESELECTION_OUTPUT_FORMAT",
            "FILESELECTION_ABSOLUTE_PATHS",
            "FILESELECTION_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get a command that runs inside the selection folder.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.folder);
        cmd
    }

    /// Path of the selection data file.
    pub fn data_file(&self) -> PathBuf {
        self.folder.join(".fileselection")
    }

    /// Parent of the selection folder.
    pub fn path(&self) -> &Path {
        self.folder.parent().expect("data folder has a parent")
    }

    /// Create a subdirectory under the selection folder.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.folder.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run `init` with the given paths and assert success.
    pub fn init(&self, paths: &[&str]) {
        self.command()
            .arg("init")
            .arg("--description")
            .arg("test selection")
            .args(paths)
            .assert()
            .success();
    }

    /// Run `list` and return stdout lines.
    pub fn list(&self) -> Vec<String> {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("Failed to run list command");
        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write the configuration file.
    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }
}
