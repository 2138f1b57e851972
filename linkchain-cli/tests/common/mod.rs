//! Common test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `linkchain` binary.
///
/// The working directory is a fresh temp dir and `HOME` points inside it,
/// so neither the user's config nor `LINKCHAIN_*` variables leak in.
pub struct TestEnv {
    temp_dir: TempDir,
    /// Canonical root of the environment; commands run here.
    pub root: PathBuf,
    /// Fake home directory.
    pub home: PathBuf,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let root = base.join("work");
        let home = base.join("home");
        fs::create_dir_all(&root).expect("Failed to create work dir");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            root,
            home,
        }
    }

    /// A command for the `linkchain` binary running inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("linkchain").expect("Failed to find linkchain binary");
        cmd.current_dir(&self.root)
            .env("HOME", &self.home)
            .env_remove("LINKCHAIN_MAX_HOPS")
            .env_remove("LINKCHAIN_FOLLOW_DIR_LINKS")
            .env_remove("LINKCHAIN_OUTPUT_FORMAT")
            .env_remove("LINKCHAIN_CONFIG")
            .env_remove("LINKCHAIN_LOG_MODE");
        cmd
    }

    /// Path relative to the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a regular file (and its parents).
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, "data").expect("Failed to write file");
        path
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Create a symlink at `relative` with raw target text `target`.
    #[cfg(unix)]
    pub fn link(&self, relative: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write a file at an absolute path.
    pub fn write(&self, path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write file");
    }

    /// Run a command that must succeed and parse its stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run linkchain");
        assert!(
            output.status.success(),
            "linkchain failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
