use regex::Regex;

use super::{Processor, filter_issues};
use crate::error::{ConfigError, ProcessorError};
use crate::issue::Issue;

/// Drops issues whose text matches any exclude pattern (case-insensitive).
pub struct Exclude {
    pattern: Option<Regex>,
}

impl Exclude {
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Ok(Self { pattern: None });
        }

        let total = format!("(?i)({})", patterns.join("|"));
        let pattern = Regex::new(&total).map_err(|source| ConfigError::InvalidPattern {
            pattern: total.clone(),
            source,
        })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

impl Processor for Exclude {
    fn name(&self) -> &str {
        "exclude"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        let Some(pattern) = &self.pattern else {
            return Ok(issues);
        };
        filter_issues(issues, |issue| Ok(!pattern.is_match(&issue.text)))
    }
}
