//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's configuration
//! - Fixture helpers for files and folders

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const LOCUS_VARIABLES: [&str; 5] = [
    "LOCUS_INCLUDE_HIDDEN",
    "LOCUS_RECURSIVE",
    "LOCUS_KEEP_EXTENSION",
    "LOCUS_OUTPUT_FORMAT",
    "LOCUS_LOG_MODE",
];

/// Test environment with an isolated working tree and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Path to the working tree the commands run in
    pub work: PathBuf,
    /// Path used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A `work` directory that commands run in
    /// - A `home` directory so no user configuration is picked up
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work = temp_dir.path().join("work");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&work).expect("Failed to create work dir");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            work,
            home,
        }
    }

    /// Get a command builder running in the work directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("locus").expect("Failed to find locus binary");
        cmd.current_dir(&self.work).env("HOME", &self.home);
        for variable in LOCUS_VARIABLES {
            cmd.env_remove(variable);
        }
        cmd
    }

    /// Absolute path of `relative` inside the work directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work.join(relative)
    }

    /// The work directory as a canonical folder path string.
    pub fn work_str(&self) -> String {
        format!("{}/", self.work.display())
    }

    /// Create a file (and its parents) in the work directory.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the work directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a project configuration file above the work directory, so it
    /// is discovered without showing up in listings.
    pub fn write_project_config(&self, yaml: &str) {
        fs::write(self.temp_dir.path().join("locus.yaml"), yaml)
            .expect("Failed to write locus.yaml");
    }

    /// Run a command and return its stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn lines(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run locus");
        assert!(
            output.status.success(),
            "locus {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
