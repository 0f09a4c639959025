//! tagrun - annotation-driven command dispatcher
//!
//! Main entry point for the `tagrun` binary.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tagrun_cli::{App, Cli, CliError, Exit};
use tagrun_common_config::RunConfig;
use tagrun_common_fs::SourceWalker;
use tagrun_common_log::{LogConfig, LogLevel};
use tagrun_dispatch::{CommandRunner, ProcessExecutor};
use tagrun_extract::GoTypeExtractor;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    init_logging(cli, &config)?;

    let walker = SourceWalker::new(config.walk_options());
    let dispatcher = CommandRunner::with_executor(ProcessExecutor::new().quiet(config.silent))
        .silent(config.silent);
    let app = App::new(config, walker, GoTypeExtractor::new(), dispatcher);

    app.run()?;
    Ok(())
}

fn init_logging(cli: &Cli, config: &RunConfig) -> Result<(), CliError> {
    let mut log = LogConfig::from_env();
    if config.silent {
        log = log.with_level(LogLevel::Off);
    } else if cli.verbose > 0 {
        log = log.with_level(cli.log_level());
    }
    tagrun_common_log::init(log)?;
    Ok(())
}

fn report(e: &CliError) {
    eprintln!("error: {e}");
    if let Some(hint) = e.hint() {
        eprintln!("hint: {hint}");
    }
    if e.show_usage() {
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("For more information, try '--help'.");
    }
}
