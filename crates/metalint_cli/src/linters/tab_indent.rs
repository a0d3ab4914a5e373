use metalint_core::{Issue, LintContext, Linter, LinterError, Position, Severity};

use super::scan_lines;

/// Reports tabs in leading indentation.
pub struct TabIndent;

impl Linter for TabIndent {
    fn name(&self) -> &str {
        "tab-indent"
    }

    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        scan_lines(ctx, |path, line_no, line| {
            let indent = &line[..line.len() - line.trim_start().len()];
            indent.find('\t').map(|col| {
                Issue::new("Tab used for indentation", Position::new(path, line_no, col + 1))
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
    fn test_reports_tab_indentation() {
        let issues = lint_source(&TabIndent, "\tfn a()\n    fn b()\n  \tfn c()\nx\ty\n");

        let lines: Vec<_> = issues.iter().map(|i| (i.line(), i.pos.column)).collect();
        assert_eq!(lines, vec![(1, 1), (3, 3)]);
    }
}
