//! Directive extraction for tagrun.
//!
//! Finds type declarations in Go sources, reads the comment block attached
//! to each one and turns `// <keyword>: key=value ...` lines into
//! [`Annotation`]s.

pub mod directive;
mod error;
mod go;

pub use error::{ExtractError, ExtractResult};
pub use go::GoTypeExtractor;

use std::path::Path;
use tagrun_common_core::Annotation;

/// Extracts annotations from a single source file.
pub trait AnnotationExtractor {
    /// Parse `path` and return one annotation per matching directive line.
    fn extract(&self, path: &Path, keyword: &str) -> ExtractResult<Vec<Annotation>>;
}
