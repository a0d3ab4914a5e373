use std::collections::BTreeMap;

use tracing::{info, info_span};

use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

/// Keeps at most `limit` issues per linter. A limit of 0 disables it.
pub struct MaxFromLinter {
    limit: usize,
    counts: BTreeMap<String, usize>,
}

impl MaxFromLinter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            counts: BTreeMap::new(),
        }
    }
}

impl Processor for MaxFromLinter {
    fn name(&self) -> &str {
        "max_from_linter"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        if self.limit == 0 {
            return Ok(issues);
        }

        filter_issues(issues, |issue| {
            let count = self.counts.entry(issue.from_linter.clone()).or_default();
            *count += 1;
            Ok(*count <= self.limit)
        })
    }

    fn finish(&mut self) {
        let span = info_span!("max_from_linter");
        let _enter = span.enter();

        for (linter, count) in &self.counts {
            if *count > self.limit {
                info!(
                    "{}/{} issues from linter {} were hidden, use --max-issues-per-linter",
                    count - self.limit,
                    count,
                    linter
                );
            }
        }

        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Position;
    use crate::test_utils::capture_logs;

    fn issues(linter: &str, n: usize) -> Vec<Issue> {
        (1..=n)
            .map(|line| {
                let mut issue = Issue::new(format!("issue {line}"), Position::new("a.rs", line, 0));
                issue.from_linter = linter.to_string();
                issue
            })
            .collect()
    }

    #[test]
    fn test_keeps_one_per_linter() {
        let mut p = MaxFromLinter::new(1);

        let out = p.process(issues("noisy", 5)).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line(), 1);

        assert_eq!(p.process(issues("quiet", 1)).unwrap().len(), 1);

        let (_, logs) = capture_logs(|| p.finish());
        assert!(logs.contains("4/5 issues from linter noisy were hidden"), "logs: {logs}");
        assert!(!logs.contains("linter quiet"));

        assert_eq!(p.process(issues("noisy", 1)).unwrap().len(), 1);
    }
}
