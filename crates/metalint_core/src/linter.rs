//! The contract between the runner and pluggable linters.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::error::LinterError;
use crate::issue::Issue;

/// A pluggable unit of work that scans sources and reports issues.
///
/// Implementations must be callable from any worker thread. A panic inside
/// [`run`](Linter::run) is caught by the runner and reported as a
/// [`LinterError::Panic`].
pub trait Linter: Send + Sync {
    /// Unique name of the linter. Issues are tagged with it.
    fn name(&self) -> &str;

    /// Scans the sources described by `ctx`.
    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError>;
}

/// One scheduled invocation of a linter.
///
/// `speed` is a hint used to order the task queue: lower values are
/// dispatched first.
#[derive(Clone)]
pub struct LinterTask {
    pub linter: Arc<dyn Linter>,
    pub speed: u32,
}

impl LinterTask {
    /// Creates a new task.
    pub fn new(linter: Arc<dyn Linter>, speed: u32) -> Self {
        Self { linter, speed }
    }

    /// Name of the linter behind this task.
    pub fn name(&self) -> &str {
        self.linter.name()
    }
}

impl fmt::Debug for LinterTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinterTask")
            .field("linter", &self.linter.name())
            .field("speed", &self.speed)
            .finish()
    }
}

/// Shared, read-only context handed to every linter run.
#[derive(Debug, Clone)]
pub struct LintContext {
    /// Root directory of the code being linted.
    pub root: PathBuf,
    /// Files selected for linting.
    pub files: Vec<PathBuf>,
    /// Number of concurrent workers.
    pub concurrency: usize,
    /// Run-wide cancellation signal.
    pub cancel: CancellationToken,
}

impl LintContext {
    /// Creates a context with one worker per available CPU.
    pub fn new(root: impl Into<PathBuf>, files: Vec<PathBuf>, cancel: CancellationToken) -> Self {
        Self {
            root: root.into(),
            files,
            concurrency: default_concurrency(),
            cancel,
        }
    }

    /// Sets the worker count. Zero is raised to one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Number of CPUs available to this process, at least one.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
