//! Template-driven command runner.

use crate::error::{DispatchError, DispatchResult};
use crate::executor::{Executor, ProcessExecutor};
use crate::substitute::substitute;
use crate::CommandDispatcher;
use std::io::{self, Write};
use tagrun_common_core::Arguments;
use tracing::debug;

/// Dispatcher that substitutes arguments into a template and hands the
/// result to an [`Executor`].
///
/// Each call makes a single execution attempt.
#[derive(Debug, Clone)]
pub struct CommandRunner<E = ProcessExecutor> {
    executor: E,
    silent: bool,
}

impl CommandRunner<ProcessExecutor> {
    /// Runner that spawns real processes.
    pub fn new() -> Self {
        Self::with_executor(ProcessExecutor::new())
    }
}

impl Default for CommandRunner<ProcessExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> CommandRunner<E> {
    /// Runner backed by a custom executor.
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            silent: false,
        }
    }

    /// Stop printing resolved commands.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Resolve `template` without running anything.
    pub fn resolve(&self, template: &str, arguments: &Arguments) -> DispatchResult<String> {
        if template.is_empty() {
            return Err(DispatchError::EmptyTemplate);
        }
        substitute(template, arguments)
    }

    fn report(&self, command: &str) {
        debug!(command, "resolved command");
        if !self.silent {
            announce(&mut io::stdout().lock(), command);
        }
    }
}

/// Print the resolved command; write errors such as a closed pipe are
/// logged and dropped.
fn announce(out: &mut impl Write, command: &str) {
    if let Err(e) = writeln!(out, "Running: {command}") {
        debug!(error = %e, "could not print command");
    }
}

impl<E: Executor> CommandDispatcher for CommandRunner<E> {
    fn dispatch(&self, template: &str, arguments: &Arguments, dry_run: bool) -> DispatchResult<()> {
        let command = self.resolve(template, arguments)?;
        self.report(&command);

        if dry_run {
            return Ok(());
        }

        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(DispatchError::InvalidCommand { command });
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        self.executor.execute(program, &args)
    }
}
