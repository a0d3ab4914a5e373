use regex::Regex;

use super::{Processor, filter_issues};
use crate::error::{ConfigError, ProcessorError};
use crate::issue::Issue;

/// Drops issues in files matching any of the configured patterns.
pub struct SkipFiles {
    patterns: Vec<Regex>,
}

impl SkipFiles {
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }
}

impl Processor for SkipFiles {
    fn name(&self) -> &str {
        "skip_files"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        if self.patterns.is_empty() {
            return Ok(issues);
        }

        filter_issues(issues, |issue| {
            let path = issue.file_path().to_string_lossy();
            Ok(!self.patterns.iter().any(|re| re.is_match(&path)))
        })
    }
}
