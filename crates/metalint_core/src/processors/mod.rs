//! Issue processors applied, in order, to every lint result.

mod autogenerated_exclude;
mod exclude;
mod max_from_linter;
mod max_per_file_from_linter;
mod max_same_issues;
mod nolint;
mod path_prettifier;
mod skip_files;
mod source_lines;
mod uniq_by_line;

pub use autogenerated_exclude::AutogeneratedExclude;
pub use exclude::Exclude;
pub use max_from_linter::MaxFromLinter;
pub use max_per_file_from_linter::MaxPerFileFromLinter;
pub use max_same_issues::MaxSameIssues;
pub use nolint::Nolint;
pub use path_prettifier::PathPrettifier;
pub use skip_files::SkipFiles;
pub use uniq_by_line::UniqByLine;

use crate::error::ProcessorError;
use crate::issue::Issue;

/// A named, stateful stage of the issue pipeline.
///
/// Processors are only ever driven from the single processing thread, so
/// they may keep state across results without synchronization.
pub trait Processor: Send {
    /// Name used for timing and logging.
    fn name(&self) -> &str;

    /// Transforms the issues of one lint result.
    ///
    /// On error the runner keeps the issues as they were before this
    /// processor ran.
    fn process(&mut self, issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError>;

    /// Called once after the last result of a run. Must not do heavy work.
    ///
    /// Processors drop their per-run state here, so the same chain can be
    /// driven again by the next run.
    fn finish(&mut self) {}
}

/// Keeps the issues for which `keep` returns `Ok(true)`.
pub(crate) fn filter_issues(
    issues: Vec<Issue>,
    mut keep: impl FnMut(&Issue) -> Result<bool, ProcessorError>,
) -> Result<Vec<Issue>, ProcessorError> {
    let mut kept = Vec::with_capacity(issues.len());
    for issue in issues {
        if keep(&issue)? {
            kept.push(issue);
        }
    }
    Ok(kept)
}
