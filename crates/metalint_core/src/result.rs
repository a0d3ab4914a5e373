//! Per-task lint results flowing through the pipeline.

use crate::error::LinterError;
use crate::issue::Issue;
use crate::linter::LinterTask;

/// The outcome of one linter task.
///
/// Workers produce exactly one of these per dispatched task. The processing
/// pipeline rewrites `issues` and forwards only error-free, non-empty results.
#[derive(Debug)]
pub struct LintResult {
    /// The task that produced this result.
    pub task: LinterTask,
    /// Set when the linter failed or panicked.
    pub error: Option<LinterError>,
    /// Issues reported by the linter. Always empty when `error` is set.
    pub issues: Vec<Issue>,
}

impl LintResult {
    /// Builds a result from the outcome of a linter run.
    pub fn from_run(task: LinterTask, outcome: Result<Vec<Issue>, LinterError>) -> Self {
        match outcome {
            Ok(issues) => Self {
                task,
                error: None,
                issues,
            },
            Err(error) => Self {
                task,
                error: Some(error),
                issues: Vec::new(),
            },
        }
    }
}
