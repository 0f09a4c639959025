//! Process execution.

use crate::error::{DispatchError, DispatchResult};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Runs a resolved program with its arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    /// Run `program` once and wait for it to finish.
    fn execute(&self, program: &str, args: &[String]) -> DispatchResult<()>;
}

/// Executor that spawns a child process.
///
/// The child inherits stdout and stderr unless `quiet` is set, in which
/// case both are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor {
    quiet: bool,
}

impl ProcessExecutor {
    /// Create an executor with inherited output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the child's output.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn output(&self) -> Stdio {
        if self.quiet {
            Stdio::null()
        } else {
            Stdio::inherit()
        }
    }
}

impl Executor for ProcessExecutor {
    #[instrument(skip(self, args), fields(program = %program))]
    fn execute(&self, program: &str, args: &[String]) -> DispatchResult<()> {
        let status = Command::new(program)
            .args(args)
            .stdout(self.output())
            .stderr(self.output())
            .status()
            .map_err(|source| DispatchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        debug!("Command finished with {}", status);
        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::ExitStatus {
                program: program.to_string(),
                status,
            })
        }
    }
}
