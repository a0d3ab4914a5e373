use std::env;
use std::path::PathBuf;

use super::Processor;
use crate::error::ProcessorError;
use crate::issue::Issue;

/// Rewrites absolute issue paths relative to the working directory.
pub struct PathPrettifier {
    root: Option<PathBuf>,
}

impl PathPrettifier {
    /// Uses the current working directory as root.
    pub fn new() -> Self {
        Self {
            root: env::current_dir().ok(),
        }
    }

    /// Uses `root` instead of the working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl Default for PathPrettifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for PathPrettifier {
    fn name(&self) -> &str {
        "path_prettifier"
    }

    fn process(&mut self, mut issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        let Some(root) = &self.root else {
            return Ok(issues);
        };

        for issue in &mut issues {
            let path = &issue.pos.filename;
            if !path.is_absolute() {
                continue;
            }
            if let Ok(rel) = path.strip_prefix(root) {
                issue.pos.filename = rel.to_path_buf();
            }
        }
        Ok(issues)
    }
}
