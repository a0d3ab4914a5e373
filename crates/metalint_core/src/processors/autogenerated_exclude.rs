use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use super::source_lines::SourceLines;
use super::{Processor, filter_issues};
use crate::error::ProcessorError;
use crate::issue::Issue;

const GENERATED_MARKERS: &[&str] = &[
    "code generated",
    "do not edit",
    "autogenerated file",
    "automatically generated",
];

/// Drops issues in files whose leading comment block marks them as generated.
#[derive(Default)]
pub struct AutogeneratedExclude {
    sources: SourceLines,
    verdicts: HashMap<PathBuf, bool>,
}

impl AutogeneratedExclude {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_generated(&mut self, issue: &Issue) -> Result<bool, ProcessorError> {
        let path = issue.file_path();
        if let Some(&generated) = self.verdicts.get(path) {
            return Ok(generated);
        }

        let lines = self.sources.get(path)?;
        let generated = has_generated_marker(&lines);
        if generated {
            debug!("File {} is generated", path.display());
        }
        self.verdicts.insert(path.to_path_buf(), generated);
        Ok(generated)
    }
}

/// Looks for a marker in the comment lines at the top of a file.
fn has_generated_marker(lines: &[String]) -> bool {
    lines
        .iter()
        .map(|l| l.trim())
        .skip_while(|l| l.is_empty())
        .take_while(|l| l.is_empty() || is_comment(l))
        .map(str::to_lowercase)
        .any(|l| GENERATED_MARKERS.iter().any(|m| l.contains(m)))
}

fn is_comment(line: &str) -> bool {
    ["//", "#", "/*", "*", "--", "<!--"]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

impl Processor for AutogeneratedExclude {
    fn name(&self) -> &str {
        "autogenerated_exclude"
    }

    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        filter_issues(issues, |issue| Ok(!self.is_generated(issue)?))
    }

    fn finish(&mut self) {
        self.sources.clear();
        self.verdicts.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;

    use super::*;
    use crate::issue::Position;

    #[rstest]
    #[case::go_style("// Code generated by protoc. DO NOT EDIT.\npackage x", true)]
    #[case::hash_comment("\n# This file is automatically generated\nx = 1", true)]
    #[case::block_comment("/*\n * @generated - do not edit\n */\nfn main() {}", true)]
    #[case::plain("// Utilities\nfn main() {}", false)]
    #[case::marker_after_code("fn main() {}\n// Code generated", false)]
    fn test_has_generated_marker(#[case] source: &str, #[case] expected: bool) {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        assert_eq!(has_generated_marker(&lines), expected);
    }

    #[test]
    fn test_issues_in_generated_files_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let generated = dir.path().join("gen.rs");
        let manual = dir.path().join("manual.rs");
        fs::write(&generated, "// Code generated. DO NOT EDIT.\nfn a() {}\n").unwrap();
        fs::write(&manual, "fn b() {}\n").unwrap();

        let mut p = AutogeneratedExclude::new();
        let out = p
            .process(vec![
                Issue::new("x", Position::new(&generated, 2, 0)),
                Issue::new("y", Position::new(&manual, 1, 0)),
            ])
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "y");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut p = AutogeneratedExclude::new();
        let result = p.process(vec![Issue::new(
            "x",
            Position::new("/nonexistent/file.rs", 1, 0),
        )]);
        assert!(matches!(result, Err(ProcessorError::Io { .. })));
    }
}
