//! Built-in text linters.

mod line_length;
mod tab_indent;
mod todo;
mod trailing_whitespace;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use metalint_core::{Issue, LintContext, LinterError, LinterTask};
use tracing::debug;

pub use line_length::LineLength;
pub use tab_indent::TabIndent;
pub use todo::Todo;
pub use trailing_whitespace::TrailingWhitespace;

/// Every built-in linter with its speed hint.
pub fn builtin() -> Vec<LinterTask> {
    vec![
        LinterTask::new(Arc::new(Todo), 1),
        LinterTask::new(Arc::new(TrailingWhitespace), 1),
        LinterTask::new(Arc::new(TabIndent), 1),
        LinterTask::new(Arc::new(LineLength::default()), 2),
    ]
}

/// Calls `check` for every line of every file in `ctx`.
///
/// Cancellation is checked between files. Files that are not UTF-8 text
/// are skipped.
pub(crate) fn scan_lines(
    ctx: &LintContext,
    mut check: impl FnMut(&Path, usize, &str) -> Option<Issue>,
) -> Result<Vec<Issue>, LinterError> {
    let mut issues = Vec::new();

    for path in &ctx.files {
        if ctx.cancel.is_cancelled() {
            return Err(LinterError::Cancelled);
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("Skipping non-text file {}", path.display());
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for (idx, line) in content.lines().enumerate() {
            if let Some(issue) = check(path, idx + 1, line) {
                issues.push(issue);
            }
        }
    }

    Ok(issues)
}
