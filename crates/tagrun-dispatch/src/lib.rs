//! Command dispatch for tagrun.
//!
//! Turns a command template plus directive arguments into a concrete
//! command line, reports it, and runs it unless in dry-run mode.

mod error;
mod executor;
mod runner;
pub mod substitute;

pub use error::{DispatchError, DispatchResult};
pub use executor::{Executor, ProcessExecutor};
pub use runner::CommandRunner;
pub use substitute::substitute;

use tagrun_common_core::Arguments;

/// Resolves and runs the command for one annotation.
pub trait CommandDispatcher {
    /// Substitute `arguments` into `template`, report the result and run
    /// it unless `dry_run` is set.
    fn dispatch(&self, template: &str, arguments: &Arguments, dry_run: bool) -> DispatchResult<()>;
}
