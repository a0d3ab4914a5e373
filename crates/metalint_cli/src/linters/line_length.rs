use metalint_core::{Issue, LintContext, Linter, LinterError, Position, Severity};

use super::scan_lines;

/// Default maximum line length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 120;

/// Reports lines longer than a maximum number of characters.
pub struct LineLength {
    max: usize,
}

impl LineLength {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Default for LineLength {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl Linter for LineLength {
    fn name(&self) -> &str {
        "line-length"
    }

    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        scan_lines(ctx, |path, line_no, line| {
            let len = line.chars().count();
            (len > self.max).then(|| {
                Issue::new(
                    format!("Line is {len} characters long (max {})", self.max),
                    Position::new(path, line_no, self.max + 1),
                )
                .with_severity(Severity::Warning)
            })
        })
    }
}
