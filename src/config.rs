//! Configuration management for jira-impact
//!
//! Input paths come from three places, in order of precedence: command line
//! flags (or their environment variables), an optional YAML file, and the
//! built-in defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::error::{Error, Result};

/// Default location of the Jira issues export
pub const DEFAULT_JIRA_PATH: &str = "fixtures/jira_issues.json";

/// Default location of the git change log
pub const DEFAULT_GIT_PATH: &str = "fixtures/git_changes.txt";

/// Settings that can be provided by a YAML file
///
/// ```yaml
/// jira: exports/issues.json
/// git: logs/changes.txt
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub jira: PathBuf,
    pub git: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jira: PathBuf::from(DEFAULT_JIRA_PATH),
            git: PathBuf::from(DEFAULT_GIT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Keys missing from the file keep their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Merge command line arguments over this configuration
    pub fn resolve(self, args: Args) -> Settings {
        Settings {
            issue: args.issue,
            jira: args.jira.unwrap_or(self.jira),
            git: args.git.unwrap_or(self.git),
        }
    }
}

/// Everything a single analysis run needs
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub issue: String,
    pub jira: PathBuf,
    pub git: PathBuf,
}

impl Settings {
    /// Settings for `issue` using the default input paths
    pub fn new(issue: impl Into<String>) -> Self {
        Config::default().resolve(Args {
            issue: issue.into(),
            ..Args::default()
        })
    }

    pub fn with_jira(mut self, path: impl Into<PathBuf>) -> Self {
        self.jira = path.into();
        self
    }

    pub fn with_git(mut self, path: impl Into<PathBuf>) -> Self {
        self.git = path.into();
        self
    }
}
