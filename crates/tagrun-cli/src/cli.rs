//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use tagrun_common_config::{ConfigLoader, RunConfig};
use tagrun_common_log::LogLevel;

use crate::error::CliError;

/// tagrun - run commands for annotated Go type declarations
///
/// Scans a source tree for type declarations whose doc comments carry
/// `// <keyword>: key=value ...` directives and runs the command template
/// once per directive with `@key` placeholders substituted.
#[derive(Debug, Parser)]
#[command(
    name = "tagrun",
    author,
    version,
    about,
    long_about = None,
    after_help = "Placeholders: @type is the declaration name, @path the source file; \
                  every key=value pair of the directive is available as @key."
)]
pub struct Cli {
    /// Root directory to scan [default: .]
    #[arg(short, long, env = "TAGRUN_ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Directive keyword, e.g. `gomock` for `// gomock: ...`
    #[arg(short, long, env = "TAGRUN_KEYWORD", value_name = "WORD")]
    pub keyword: Option<String>,

    /// Command template with @key placeholders
    #[arg(short = 'c', long = "cmd", env = "TAGRUN_CMD", value_name = "TEMPLATE")]
    pub cmd: Option<String>,

    /// Print the commands without running them
    #[arg(short = 'n', long = "dry", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Suppress all output
    #[arg(short, long)]
    pub silent: bool,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "skip", value_name = "NAME", action = ArgAction::Append)]
    pub skip: Vec<String>,

    /// Source file suffix [default: .go]
    #[arg(long = "ext", value_name = "SUFFIX")]
    pub ext: Option<String>,

    /// Path to configuration file [default: ./tagrun.yaml when present]
    #[arg(long, env = "TAGRUN_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "silent")]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the run configuration: flags and environment over the
    /// config file over defaults. The result is validated.
    pub fn load_config(&self) -> Result<RunConfig, CliError> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new(path),
            None => ConfigLoader::discover("."),
        };
        let mut config = RunConfig::from_file(loader.load()?);
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the values given on the command line or in the environment.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(keyword) = &self.keyword {
            config.keyword = keyword.clone();
        }
        if let Some(cmd) = &self.cmd {
            config.template = cmd.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.silent {
            config.silent = true;
        }
        for name in &self.skip {
            if !config.skip_dirs.contains(name) {
                config.skip_dirs.push(name.clone());
            }
        }
        if let Some(ext) = &self.ext {
            config.suffix = ext.clone();
        }
    }

    /// Log level selected by `--silent` and `-v`.
    pub fn log_level(&self) -> LogLevel {
        if self.silent {
            LogLevel::Off
        } else {
            LogLevel::from_verbosity(self.verbose)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tagrun"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["-r", "src", "-k", "gomock", "-c", "echo @type", "-n", "-s"]);
        assert_eq!(cli.root, Some(PathBuf::from("src")));
        assert_eq!(cli.keyword.as_deref(), Some("gomock"));
        assert_eq!(cli.cmd.as_deref(), Some("echo @type"));
        assert!(cli.dry_run);
        assert!(cli.silent);
    }

    #[test]
    fn test_dry_run_alias() {
        assert!(parse(&["--dry-run"]).dry_run);
        assert!(parse(&["--dry"]).dry_run);
    }

    #[test]
    fn test_silent_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tagrun", "-s", "-v"]).is_err());
    }

    #[test]
    fn test_apply_overrides_file_values() {
        let cli = parse(&["-k", "mock", "--skip", "gen", "--ext", ".proto"]);
        let mut config = RunConfig {
            keyword: "from-file".to_string(),
            template: "echo @type".to_string(),
            ..RunConfig::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.keyword, "mock");
        assert_eq!(config.template, "echo @type");
        assert_eq!(config.suffix, ".proto");
        assert!(config.skip_dirs.contains(&"gen".to_string()));
        assert!(config.skip_dirs.contains(&"vendor".to_string()));
    }

    #[test]
    fn test_skip_is_not_duplicated() {
        let cli = parse(&["--skip", "vendor", "--skip", "vendor"]);
        let mut config = RunConfig::default();
        let before = config.skip_dirs.len();
        cli.apply(&mut config);
        assert_eq!(config.skip_dirs.len(), before);
    }

    #[test]
    fn test_unset_flags_leave_config_alone() {
        let cli = parse(&[]);
        let mut config = RunConfig {
            root: PathBuf::from("internal"),
            dry_run: true,
            ..RunConfig::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.root, PathBuf::from("internal"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse(&[]).log_level(), LogLevel::Warn);
        assert_eq!(parse(&["-vv"]).log_level(), LogLevel::Debug);
        assert_eq!(parse(&["-s"]).log_level(), LogLevel::Off);
    }
}
