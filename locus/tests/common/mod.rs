//! Common test utilities for integration tests.
//!
//! This module provides a scratch directory tree that tests populate with
//! real files and folders, plus the host that resolves handles inside it.

use std::fs;
use std::path::{Path, PathBuf};

use locus::{Folder, Host};
use tempfile::TempDir;

/// A temporary directory tree on the real filesystem.
///
/// The tree is removed when the fixture is dropped.
pub struct TestTree {
    dir: TempDir,
    host: Host,
}

#[allow(dead_code)]
impl TestTree {
    /// Creates an empty tree with its own host.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            host: Host::os(),
        }
    }

    /// The host handles in this tree are resolved on.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Absolute path of the tree's root directory.
    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }

    /// The canonical folder path of the root, with a trailing separator.
    pub fn root_str(&self) -> String {
        format!("{}/", self.dir.path().to_string_lossy().trim_end_matches('/'))
    }

    /// The root as a folder handle.
    pub fn root(&self) -> Folder {
        self.host
            .folder(&self.dir.path().to_string_lossy())
            .expect("resolve tree root")
    }

    /// Absolute path of `relative` inside the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes a file, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent folders");
        }
        fs::write(path, contents).expect("write file");
        self
    }

    /// Creates a folder and its parents.
    pub fn folder(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.join(relative)).expect("create folder");
        self
    }
}
