//! Test utilities for tagrun crates.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Creates a temporary Go source file with given content.
pub fn temp_source(content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("example.go");
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// Writes `(relative path, content)` pairs under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }
}

/// Creates a temporary directory populated with the given files.
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = temp_dir();
    write_tree(dir.path(), files);
    dir
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
