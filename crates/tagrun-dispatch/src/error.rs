//! Dispatch errors.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while dispatching a single command.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No command template was configured.
    #[error("template cannot be empty")]
    EmptyTemplate,

    /// The template resolved to nothing runnable.
    #[error("invalid command after substitution: {command:?}")]
    InvalidCommand {
        /// The substituted command line.
        command: String,
    },

    /// The placeholder pattern could not be compiled.
    #[error("failed to build placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The program could not be started.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        /// Program name.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran but did not succeed.
    #[error("{program} exited with {status}")]
    ExitStatus {
        /// Program name.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Result alias for dispatch.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
