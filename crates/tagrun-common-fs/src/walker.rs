//! Recursive source-file walker.

use crate::error::{WalkError, WalkResult};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

/// Default directories pruned from every walk.
const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "vendor", "testdata"];

/// Default source-file suffix.
const DEFAULT_SUFFIX: &str = ".go";

/// Walks a directory tree and hands matching files to a visitor.
pub trait FileWalker {
    /// Visit every matching file under `root`.
    ///
    /// The first error returned by `visit` stops the walk and is returned
    /// as-is.
    fn walk<F>(&self, root: &Path, visit: F) -> WalkResult<()>
    where
        F: FnMut(&Path) -> WalkResult<()>;
}

/// Options for source walking.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directory names that are never descended into.
    pub skip_dirs: Vec<String>,
    /// Required file-name suffix.
    pub suffix: String,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl WalkOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the skip list.
    pub fn skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add a directory name to the skip list.
    pub fn skip(mut self, name: &str) -> Self {
        self.skip_dirs.push(name.to_string());
        self
    }

    /// Set the file-name suffix.
    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    fn is_skipped(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|name| self.skip_dirs.iter().any(|skip| skip == name))
            .unwrap_or(false)
    }

    fn has_suffix(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|name| name.ends_with(&self.suffix))
            .unwrap_or(false)
    }
}

/// Walker over the local file system.
#[derive(Debug, Clone, Default)]
pub struct SourceWalker {
    options: WalkOptions,
}

impl SourceWalker {
    /// Create a walker with the given options.
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }

    // The root is exempt so an explicit `--root vendor` still works.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && self.options.is_skipped(entry.file_name())
    }
}

impl FileWalker for SourceWalker {
    #[instrument(skip(self, visit), fields(root = %root.display()))]
    fn walk<F>(&self, root: &Path, mut visit: F) -> WalkResult<()>
    where
        F: FnMut(&Path) -> WalkResult<()>,
    {
        if !root.exists() {
            return Err(WalkError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let pruned = self.is_pruned(entry);
                if pruned {
                    debug!(path = %entry.path().display(), "skipping directory");
                }
                !pruned
            });

        let mut visited = 0usize;
        for entry in walker {
            let entry = entry.map_err(|e| WalkError::from_walkdir(root, e))?;

            if !entry.file_type().is_file() || !self.options.has_suffix(entry.file_name()) {
                continue;
            }

            trace!(path = %entry.path().display(), "visiting source file");
            visit(entry.path())?;
            visited += 1;
        }

        debug!("Visited {} source files", visited);
        Ok(())
    }
}
