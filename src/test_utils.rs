//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::RefCell;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Directories whose permissions were changed are restored before the
/// directory is removed, so locked fixtures clean up on drop.
pub struct TestTree {
    dir: TempDir,
    locked: RefCell<Vec<PathBuf>>,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            locked: RefCell::new(Vec::new()),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add `count` empty files named `file1.txt`..`fileN.txt` under `dir`.
    pub fn add_files(&self, dir: &str, count: usize) {
        for i in 1..=count {
            self.add_file(&format!("{}/file{}.txt", dir, i), "");
        }
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Set the permission bits of an existing entry.
    #[cfg(unix)]
    pub fn set_mode(&self, path: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
        if full_path.is_dir() {
            self.locked.borrow_mut().push(full_path);
        }
    }

    /// Set the modification time of an existing file.
    pub fn set_modified(&self, path: &str, time: SystemTime) {
        let full_path = self.dir.path().join(path);
        File::options()
            .write(true)
            .open(&full_path)
            .and_then(|f| f.set_modified(time))
            .expect("Failed to set modification time");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            for path in self.locked.borrow().iter() {
                let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
            }
        }
    }
}
