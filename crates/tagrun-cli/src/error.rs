//! CLI error handling and exit codes.

use std::process::ExitCode;

use tagrun_common_config::ConfigError;
use tagrun_common_fs::WalkError;
use tagrun_common_log::LogError;
use thiserror::Error;

/// Application exit codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    TraversalError = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Failures that stop a run.
///
/// Per-file parse errors and per-command failures never reach this type;
/// the orchestrator logs them and moves on.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("traversal failed: {0}")]
    Traversal(#[from] WalkError),

    #[error(transparent)]
    Log(#[from] LogError),
}

impl CliError {
    /// Exit status for this error.
    pub fn exit(&self) -> Exit {
        match self {
            Self::Config(_) => Exit::ConfigError,
            Self::Traversal(_) => Exit::TraversalError,
            Self::Log(_) => Exit::GeneralError,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }

    /// Whether the usage line should follow the error message.
    pub fn show_usage(&self) -> bool {
        matches!(self, Self::Config(ConfigError::Missing { .. }))
    }

    /// Get a hint for the user.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::Missing { .. }) => {
                Some("pass it on the command line, set TAGRUN_KEYWORD / TAGRUN_CMD, or add it to tagrun.yaml")
            }
            Self::Config(ConfigError::ParseError { .. }) => {
                Some("check the syntax of your configuration file")
            }
            Self::Traversal(err) if err.is_not_found() => Some("check the --root path"),
            _ => None,
        }
    }
}
