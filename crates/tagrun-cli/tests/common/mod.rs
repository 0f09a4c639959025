//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tagrun_test_utils::write_tree;
use tempfile::{tempdir, TempDir};

/// Test context with a scratch source tree.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Add source files, given as `(relative path, content)` pairs.
    pub fn with_files(self, files: &[(&str, &str)]) -> Self {
        write_tree(self.path(), files);
        self
    }

    /// Write `tagrun.yaml` into the working directory.
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(self.config_path(), config).expect("Failed to write config");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("tagrun.yaml")
    }

    /// Create a command running inside the scratch tree with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tagrun").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("TAGRUN_ROOT")
            .env_remove("TAGRUN_KEYWORD")
            .env_remove("TAGRUN_CMD")
            .env_remove("TAGRUN_CONFIG")
            .env_remove("TAGRUN_LOG_LEVEL")
            .env_remove("TAGRUN_LOG_FORMAT")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Go source with one type per `(name, directive)` pair.
pub fn go_source(keyword: &str, types: &[(&str, &str)]) -> String {
    let mut src = String::from("package sample\n");
    for (name, directive) in types {
        src.push_str(&format!("\n// {keyword}: {directive}\ntype {name} interface{{}}\n"));
    }
    src
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_exit_code(&self, code: i32);
    fn stdout_lines(&self) -> Vec<String>;
    fn stderr_text(&self) -> String;
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}\nstderr: {}",
            code,
            self.status.code(),
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}
