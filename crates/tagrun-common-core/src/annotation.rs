//! Annotation records produced by the extractor.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Reserved argument key holding the tagged declaration's name.
pub const TYPE_KEY: &str = "type";

/// Reserved argument key holding the source file path.
pub const PATH_KEY: &str = "path";

/// Directive arguments, keyed by name.
///
/// A `BTreeMap` keeps iteration order stable, which makes placeholder
/// substitution and test output deterministic.
pub type Arguments = BTreeMap<String, String>;

/// One directive attached to one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    declaration: String,
    source_path: PathBuf,
    arguments: Arguments,
}

impl Annotation {
    /// Create a new annotation.
    pub fn new(
        declaration: impl Into<String>,
        source_path: impl Into<PathBuf>,
        arguments: Arguments,
    ) -> Self {
        Self {
            declaration: declaration.into(),
            source_path: source_path.into(),
            arguments,
        }
    }

    /// Name of the tagged declaration.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// File the declaration lives in.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Resolved directive arguments, reserved keys included.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Look up a single argument.
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).map(String::as_str)
    }
}

/// Seed the reserved arguments for a declaration.
///
/// Directive pairs are merged on top of this map, so a directive may
/// override either entry.
pub fn reserved_arguments(declaration: &str, source_path: &Path) -> Arguments {
    let mut arguments = Arguments::new();
    arguments.insert(TYPE_KEY.to_string(), declaration.to_string());
    arguments.insert(
        PATH_KEY.to_string(),
        source_path.to_string_lossy().into_owned(),
    );
    arguments
}
