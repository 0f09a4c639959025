//! tagrun CLI library.
//!
//! The binary is a thin shell around [`App`]: it parses flags, resolves the
//! run configuration and hands the real traverser, extractor and dispatcher
//! to the orchestrator.

pub mod app;
pub mod cli;
pub mod error;

pub use app::{App, RunSummary};
pub use cli::Cli;
pub use error::{CliError, Exit};
