//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home and working directory.
///
/// Commands run with `HOME` pointing into the temporary directory, so the
/// caller's `~/.fpath/config.yaml` is never read, and with every `FPATH_*`
/// variable cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory handed to the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path =
            std::fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command running in the temporary directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fpath").expect("Failed to find fpath binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.home)
            .env_remove("FPATH_CONFIG")
            .env_remove("FPATH_LOG_MODE")
            .env_remove("FPATH_MAX_SYMLINK_DEPTH")
            .env_remove("FPATH_PASSWD_FILE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file in the test environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command that must succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run fpath");
        assert!(
            output.status.success(),
            "fpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a path for passing on the command line.
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
