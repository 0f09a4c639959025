//! Traversal errors.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a traversal.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The traversal root does not exist.
    #[error("root not found: {path}")]
    RootNotFound {
        /// Root that was requested.
        path: PathBuf,
    },

    /// A directory or entry could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Entry that failed, or the root when unknown.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// The visitor asked to stop the traversal.
    #[error("traversal aborted: {0}")]
    Aborted(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WalkError {
    /// Wrap a visitor failure.
    pub fn aborted(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Aborted(err.into())
    }

    /// Whether this error reports a missing root.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RootNotFound { .. })
    }

    pub(crate) fn from_walkdir(root: &Path, source: walkdir::Error) -> Self {
        let missing_root = source.depth() == 0
            && source
                .io_error()
                .map(|e| e.kind() == io::ErrorKind::NotFound)
                .unwrap_or(false);
        if missing_root {
            return Self::RootNotFound {
                path: root.to_path_buf(),
            };
        }

        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self::Io { path, source }
    }
}

/// Result alias for traversal.
pub type WalkResult<T> = std::result::Result<T, WalkError>;
