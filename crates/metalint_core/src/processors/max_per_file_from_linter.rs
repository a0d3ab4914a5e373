use std::collections::HashMap;
use std::path::PathBuf;

use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

/// Caps the issues a given linter may report per file.
///
/// Only linters present in the limits map are capped.
#[derive(Default)]
pub struct MaxPerFileFromLinter {
    limits: HashMap<String, usize>,
    counts: HashMap<(PathBuf, String), usize>,
}

impl MaxPerFileFromLinter {
    pub fn new(limits: HashMap<String, usize>) -> Self {
        Self {
            limits,
            counts: HashMap::new(),
        }
    }
}

impl Processor for MaxPerFileFromLinter {
    fn name(&self) -> &str {
        "max_per_file_from_linter"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        if self.limits.is_empty() {
            return Ok(issues);
        }

        filter_issues(issues, |issue| {
            let Some(&limit) = self.limits.get(&issue.from_linter) else {
                return Ok(true);
            };
            let count = self
                .counts
                .entry((issue.file_path().to_path_buf(), issue.from_linter.clone()))
                .or_default();
            *count += 1;
            Ok(*count <= limit)
        })
    }

    fn finish(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Position;

    fn issue(linter: &str, file: &str, line: usize) -> Issue {
        let mut issue = Issue::new("x", Position::new(file, line, 0));
        issue.from_linter = linter.to_string();
        issue
    }

    #[test]
    fn test_caps_only_configured_linters_per_file() {
        let mut p = MaxPerFileFromLinter::new(HashMap::from([("tab-indent".to_string(), 1)]));

        let out = p
            .process(vec![
                issue("tab-indent", "a.rs", 1),
                issue("tab-indent", "a.rs", 2),
                issue("tab-indent", "b.rs", 1),
                issue("todo", "a.rs", 3),
                issue("todo", "a.rs", 4),
            ])
            .unwrap();

        let kept: Vec<_> = out
            .iter()
            .map(|i| (i.from_linter.as_str(), i.line()))
            .collect();
        assert_eq!(
            kept,
            vec![("tab-indent", 1), ("tab-indent", 1), ("todo", 3), ("todo", 4)]
        );
    }

    #[test]
    fn test_finish_resets_counts() {
        let mut p = MaxPerFileFromLinter::new(HashMap::from([("todo".to_string(), 1)]));
        assert_eq!(p.process(vec![issue("todo", "a.rs", 1)]).unwrap().len(), 1);
        assert!(p.process(vec![issue("todo", "a.rs", 2)]).unwrap().is_empty());

        p.finish();
        assert_eq!(p.process(vec![issue("todo", "a.rs", 2)]).unwrap().len(), 1);
    }
}
