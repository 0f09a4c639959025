//! Extraction errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting annotations from a file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree.
    #[error("parser produced no syntax tree for {path}")]
    NoTree {
        /// File that failed.
        path: PathBuf,
    },

    /// The file is not syntactically valid.
    #[error("{path}:{line}:{column}: syntax error near {snippet:?}")]
    Syntax {
        /// File that failed.
        path: PathBuf,
        /// 1-based line of the first error.
        line: usize,
        /// 1-based column of the first error.
        column: usize,
        /// Source text at the error, truncated.
        snippet: String,
    },
}

/// Result alias for extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
