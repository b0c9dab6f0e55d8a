//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the host environment
//! - Bundle fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the CLI reads; cleared for every test command.
const DTCONF_VARS: [&str; 9] = [
    "DANDELION_DT_CONFIGURATION",
    "DTCONF_FALLBACK_DIR",
    "DTCONF_DEFAULTS_DIR",
    "DTCONF_BUNDLE_NAME",
    "DTCONF_DEFAULT_RESOURCE",
    "DTCONF_JSTL",
    "DTCONF_SETTINGS",
    "DTCONF_OUTPUT_FORMAT",
    "DTCONF_LOG_MODE",
];

/// Test environment with an isolated working, home and bundle directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory user bundles are written to
    pub bundle_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory used as working and home directory
    /// - A `bundles` directory for user bundles
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let bundle_dir = temp_path.join("bundles");
        std::fs::create_dir_all(&bundle_dir).expect("Failed to create bundle directory");

        Self {
            temp_dir,
            temp_path,
            bundle_dir,
        }
    }

    /// Get a command builder isolated from the host environment.
    ///
    /// No bundle directory is configured.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("dtconf").expect("Failed to find dtconf binary");
        for var in DTCONF_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder reading bundles from this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--configuration-dir").arg(&self.bundle_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a user bundle into the bundle directory.
    pub fn write_bundle(&self, name: &str, content: &str) -> PathBuf {
        let path = self.bundle_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write bundle");
        path
    }

    /// Write a file relative to the temp directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Parse command stdout as JSON.
#[allow(dead_code)]
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("Output is not valid JSON")
}
