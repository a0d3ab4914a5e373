use metalint_core::{Issue, LintContext, Linter, LinterError, Position, Severity};

use super::scan_lines;

/// Reports lines ending in spaces or tabs.
pub struct TrailingWhitespace;

impl Linter for TrailingWhitespace {
    fn name(&self) -> &str {
        "trailing-whitespace"
    }

    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        scan_lines(ctx, |path, line_no, line| {
            let trimmed = line.trim_end_matches([' ', '\t']);
            (trimmed.len() != line.len()).then(|| {
                Issue::new(
                    "Trailing whitespace",
                    Position::new(path, line_no, trimmed.chars().count() + 1),
                )
                .with_severity(Severity::Warning)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linters::test_support::lint_source;

    #[test]
    fn test_reports_trailing_whitespace() {
        let issues = lint_source(&TrailingWhitespace, "clean\ndirty  \n\t\nok\n");

        let lines: Vec<_> = issues.iter().map(|i| (i.line(), i.pos.column)).collect();
        assert_eq!(lines, vec![(2, 6), (3, 1)]);
    }
}
