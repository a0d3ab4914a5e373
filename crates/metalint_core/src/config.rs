//! Runner configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::linter::default_concurrency;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How the run is executed.
    pub run: RunConfig,
    /// How issues are filtered and capped.
    pub issues: IssuesConfig,
    /// Which linters are selected.
    pub linters: LintersConfig,
}

/// Execution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of concurrent workers.
    pub concurrency: usize,

    /// Run deadline in seconds. `0` disables the deadline.
    pub deadline: u64,

    /// Regular expressions; issues in matching files are dropped.
    pub skip_files: Vec<String>,

    /// Directory names skipped while discovering files.
    pub skip_dirs: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            deadline: default_deadline(),
            skip_files: Vec::new(),
            skip_dirs: Vec::new(),
        }
    }
}

fn default_deadline() -> u64 {
    60
}

impl RunConfig {
    /// The deadline as a duration, `None` if disabled.
    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline > 0).then(|| Duration::from_secs(self.deadline))
    }
}

/// Issue filtering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IssuesConfig {
    /// Regular expressions matched against issue text.
    pub exclude: Vec<String>,

    /// Whether issues in generated files are dropped.
    pub exclude_generated: bool,

    /// Maximum issues reported per linter. `0` means unlimited.
    pub max_issues_per_linter: usize,

    /// Maximum issues with identical text. `0` means unlimited.
    pub max_same_issues: usize,

    /// Per-file caps for specific linters.
    pub max_per_file_from_linter: HashMap<String, usize>,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            exclude_generated: true,
            max_issues_per_linter: 50,
            max_same_issues: 3,
            max_per_file_from_linter: HashMap::new(),
        }
    }
}

/// Linter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintersConfig {
    /// Linters to run. Empty means every available linter.
    pub enable: Vec<String>,
    /// Linters to skip. Wins over `enable`.
    pub disable: Vec<String>,
}

impl LintersConfig {
    /// Returns whether `name` is selected.
    pub fn is_enabled(&self, name: &str) -> bool {
        if self.disable.iter().any(|n| n == name) {
            return false;
        }
        self.enable.is_empty() || self.enable.iter().any(|n| n == name)
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.run.concurrency == 0 {
            return Err(ConfigError::parse("run.concurrency must be at least 1"));
        }
        Ok(())
    }
}
