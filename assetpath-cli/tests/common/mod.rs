//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated test environment: a temporary project
//! directory used as the working directory and a temporary home directory
//! so that no real user configuration leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would change the effective configuration.
const CONFIG_ENV_VARS: [&str; 5] = [
    "ASSETPATH_ALT_SEPARATOR",
    "ASSETPATH_SANITIZE",
    "ASSETPATH_SANITIZE_PATTERN",
    "ASSETPATH_SANITIZE_REPLACEMENT",
    "ASSETPATH_LOG_MODE",
];

/// Test environment with isolated project and home directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project directory, used as the working directory
    pub project_dir: PathBuf,
    /// Fake home directory
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            project_dir,
            home_dir,
        }
    }

    /// Command running in the project directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetpath").expect("Failed to find assetpath binary");
        cmd.current_dir(&self.project_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for var in CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the project path.
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// Write `assetpath.yaml` in the project directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        let path = self.project_dir.join("assetpath.yaml");
        std::fs::write(&path, contents).expect("Failed to write project config");
        path
    }

    /// Write `~/.assetpath/config.yaml` in the fake home directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home_dir.join(".assetpath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Create a subdirectory of the project.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.project_dir.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run assetpath");
        assert!(
            output.status.success(),
            "assetpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
