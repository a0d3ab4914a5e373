use std::collections::BTreeMap;

use tracing::{info, info_span};

use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

/// Keeps at most `limit` issues with identical text. A limit of 0 disables it.
pub struct MaxSameIssues {
    limit: usize,
    counts: BTreeMap<String, usize>,
}

impl MaxSameIssues {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            counts: BTreeMap::new(),
        }
    }
}

impl Processor for MaxSameIssues {
    fn name(&self) -> &str {
        "max_same_issues"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        if self.limit == 0 {
            return Ok(issues);
        }

        filter_issues(issues, |issue| {
            let count = self.counts.entry(issue.text.clone()).or_default();
            *count += 1;
            Ok(*count <= self.limit)
        })
    }

    fn finish(&mut self) {
        let span = info_span!("max_same_issues");
        let _enter = span.enter();

        for (text, count) in &self.counts {
            if *count > self.limit {
                info!(
                    "{}/{} issues with text {:?} were hidden, use --max-same-issues",
                    count - self.limit,
                    count,
                    text
                );
            }
        }

        self.counts.clear();
    }
}
