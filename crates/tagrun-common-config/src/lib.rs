//! Configuration for tagrun.
//!
//! A [`RunConfig`] is assembled once at startup from command-line flags,
//! the environment and an optional `tagrun.yaml`, validated, and then
//! passed by reference to every component.

pub mod loader;
pub mod run;

pub use loader::{ConfigError, ConfigLoader, FileConfig, DEFAULT_CONFIG_FILE};
pub use run::RunConfig;
