use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use super::source_lines::SourceLines;
use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?://|#|--)\s*nolint\b(?::\s*([\w-]+(?:\s*,\s*[\w-]+)*))?")
        .expect("nolint directive pattern is valid")
});

/// Which linters a directive suppresses.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Suppression {
    All,
    Linters(Vec<String>),
}

impl Suppression {
    fn covers(&self, linter: &str) -> bool {
        match self {
            Self::All => true,
            Self::Linters(names) => names.iter().any(|n| n == linter),
        }
    }

    fn merge(&mut self, other: Suppression) {
        match other {
            Self::All => *self = Self::All,
            Self::Linters(more) => {
                if let Self::Linters(names) = self {
                    names.extend(more);
                }
            }
        }
    }
}

/// Drops issues on lines carrying a `nolint` directive.
///
/// `nolint` suppresses every linter, `nolint:a,b` only the named ones. A
/// directive alone on its line also covers the following line.
#[derive(Default)]
pub struct Nolint {
    sources: SourceLines,
    // Per file: line number -> suppression applying to that line.
    directives: HashMap<PathBuf, HashMap<usize, Suppression>>,
}

impl Nolint {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_suppressed(&mut self, issue: &Issue) -> Result<bool, ProcessorError> {
        let path = issue.file_path();
        if !self.directives.contains_key(path) {
            let lines = self.sources.get(path)?;
            self.directives
                .insert(path.to_path_buf(), parse_directives(&lines));
        }

        Ok(self
            .directives
            .get(path)
            .and_then(|lines| lines.get(&issue.line()))
            .is_some_and(|s| s.covers(&issue.from_linter)))
    }
}

/// Maps each 1-indexed line to the suppression that applies to it.
fn parse_directives(lines: &[String]) -> HashMap<usize, Suppression> {
    let mut directives: HashMap<usize, Suppression> = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = DIRECTIVE.captures(line) else {
            continue;
        };
        let suppression = match caps.get(1) {
            Some(list) => Suppression::Linters(
                list.as_str()
                    .split(',')
                    .map(|n| n.trim().to_string())
                    .collect(),
            ),
            None => Suppression::All,
        };

        let line_no = idx + 1;
        let standalone = caps
            .get(0)
            .is_some_and(|m| line[..m.start()].trim().is_empty());

        let mut add = |at: usize, s: Suppression| match directives.entry(at) {
            Entry::Occupied(mut e) => e.get_mut().merge(s),
            Entry::Vacant(e) => {
                e.insert(s);
            }
        };
        add(line_no, suppression.clone());
        if standalone {
            add(line_no + 1, suppression);
        }
    }

    directives
}

impl Processor for Nolint {
    fn name(&self) -> &str {
        "nolint"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        filter_issues(issues, |issue| Ok(!self.is_suppressed(issue)?))
    }

    fn finish(&mut self) {
        self.sources.clear();
        self.directives.clear();
    }
}
