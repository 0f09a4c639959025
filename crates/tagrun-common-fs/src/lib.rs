//! File system traversal for tagrun.
//!
//! The walker yields candidate source files under a root directory,
//! pruning skip-listed directories and filtering on a file-name suffix.

mod error;
mod walker;

pub use error::{WalkError, WalkResult};
pub use walker::{FileWalker, SourceWalker, WalkOptions};
