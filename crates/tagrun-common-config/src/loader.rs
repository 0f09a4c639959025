//! Configuration file loading and parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tagrun.yaml";

/// Config loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path} at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error("invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("missing required option: {flag}")]
    Missing { flag: &'static str },
}

/// Values read from a config file. Every field is optional; command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Root directory to scan.
    pub root: Option<PathBuf>,
    /// Directive keyword.
    pub keyword: Option<String>,
    /// Command template.
    pub cmd: Option<String>,
    /// Print commands without running them.
    pub dry_run: Option<bool>,
    /// Suppress all output.
    pub silent: Option<bool>,
    /// Directory names to prune.
    pub skip: Option<Vec<String>>,
    /// Source file suffix.
    pub ext: Option<String>,
}

/// Configuration file loader.
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Load from an explicit path; a missing file is an error.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Load `tagrun.yaml` from `dir` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_CONFIG_FILE),
            required: false,
        }
    }

    /// Load and parse the file.
    pub fn load(&self) -> Result<FileConfig, ConfigError> {
        if !self.path.exists() {
            if self.required {
                return Err(ConfigError::NotFound {
                    path: self.path.clone(),
                });
            }
            return Ok(FileConfig::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            ConfigError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;
        self.parse(&contents)
    }

    /// Parse config text, expanding environment variables first.
    pub fn parse(&self, contents: &str) -> Result<FileConfig, ConfigError> {
        let expanded = expand_env_vars(contents)?;
        if expanded.trim().is_empty() {
            return Ok(FileConfig::default());
        }

        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            path: self.path.clone(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;
    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for cap in re.captures_iter(content) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result.push_str(&content[last..full_match.start()]);
        result.push_str(&value);
        last = full_match.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}
