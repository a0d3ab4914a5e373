use std::collections::HashSet;
use std::path::PathBuf;

use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

/// Keeps only the first issue reported for each file and line.
///
/// The set of seen lines is kept until the run finishes, so this also
/// deduplicates across linters.
#[derive(Default)]
pub struct UniqByLine {
    seen: HashSet<(PathBuf, usize)>,
}

impl UniqByLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Processor for UniqByLine {
    fn name(&self) -> &str {
        "uniq_by_line"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        filter_issues(issues, |issue| {
            Ok(self
                .seen
                .insert((issue.file_path().to_path_buf(), issue.line())))
        })
    }

    fn finish(&mut self) {
        self.seen.clear();
    }
}
