//! The validated configuration of one run.

use crate::loader::{ConfigError, FileConfig};
use std::path::PathBuf;
use tagrun_common_fs::WalkOptions;

/// Everything the pipeline needs to know, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// Directive keyword, e.g. `gomock`.
    pub keyword: String,
    /// Command template with `@key` placeholders.
    pub template: String,
    /// Print commands without running them.
    pub dry_run: bool,
    /// Suppress all output.
    pub silent: bool,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// Source file suffix.
    pub suffix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        let walk = WalkOptions::default();
        Self {
            root: PathBuf::from("."),
            keyword: String::new(),
            template: String::new(),
            dry_run: false,
            silent: false,
            skip_dirs: walk.skip_dirs,
            suffix: walk.suffix,
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with whatever the config file sets.
    pub fn from_file(file: FileConfig) -> Self {
        let mut config = Self::default();
        if let Some(root) = file.root {
            config.root = root;
        }
        if let Some(keyword) = file.keyword {
            config.keyword = keyword;
        }
        if let Some(cmd) = file.cmd {
            config.template = cmd;
        }
        if let Some(dry_run) = file.dry_run {
            config.dry_run = dry_run;
        }
        if let Some(silent) = file.silent {
            config.silent = silent;
        }
        if let Some(skip) = file.skip {
            config.skip_dirs = skip;
        }
        if let Some(ext) = file.ext {
            config.suffix = ext;
        }
        config
    }

    /// Check that the required options are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword.is_empty() {
            return Err(ConfigError::Missing { flag: "--keyword" });
        }
        if self.template.is_empty() {
            return Err(ConfigError::Missing { flag: "--cmd" });
        }
        Ok(())
    }

    /// Traversal options for this run.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::new()
            .skip_dirs(self.skip_dirs.iter().cloned())
            .suffix(&self.suffix)
    }
}
