//! The runner: wires workers, processing and collection together.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use tracing::{Dispatch, error, info_span};

use crate::config::Config;
use crate::error::ConfigError;
use crate::issue::Issue;
use crate::linter::{LintContext, LinterTask};
use crate::pipeline::{ProcessorChain, process_lint_results};
use crate::processors::{
    AutogeneratedExclude, Exclude, MaxFromLinter, MaxPerFileFromLinter, MaxSameIssues, Nolint,
    PathPrettifier, Processor, SkipFiles, UniqByLine,
};
use crate::result::LintResult;
use crate::worker::run_workers;

const ISSUES_CAPACITY: usize = 1024;

/// Runs linters concurrently and streams their processed issues.
pub struct Runner {
    processors: ProcessorChain,
}

impl Runner {
    /// Builds a runner with the standard processor chain for `config`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let issues = &config.issues;

        let mut processors: Vec<Box<dyn Processor>> = Vec::new();
        // Must be before the file based filters.
        processors.push(Box::new(PathPrettifier::new()));
        processors.push(Box::new(SkipFiles::new(&config.run.skip_files)?));
        if issues.exclude_generated {
            processors.push(Box::new(AutogeneratedExclude::new()));
        }
        processors.push(Box::new(Exclude::new(&issues.exclude)?));
        processors.push(Box::new(Nolint::new()));
        processors.push(Box::new(UniqByLine::new()));
        processors.push(Box::new(MaxPerFileFromLinter::new(
            issues.max_per_file_from_linter.clone(),
        )));
        processors.push(Box::new(MaxSameIssues::new(issues.max_same_issues)));
        processors.push(Box::new(MaxFromLinter::new(issues.max_issues_per_linter)));

        Ok(Self::with_processors(processors))
    }

    /// Builds a runner with a custom processor chain.
    pub fn with_processors(processors: Vec<Box<dyn Processor>>) -> Self {
        Self {
            processors: Arc::new(Mutex::new(processors)),
        }
    }

    /// Names of the processors, in chain order.
    pub fn processor_names(&self) -> Vec<String> {
        self.processors
            .lock()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Runs every task and returns the stream of processed issues.
    ///
    /// This never fails: linter and processor failures are logged and
    /// isolated. If the deadline has already passed once the pipeline is
    /// wired, every finished result is drained and counted before the
    /// issues are returned.
    pub fn run(&self, tasks: &[LinterTask], ctx: Arc<LintContext>) -> Receiver<Issue> {
        let span = info_span!("runner");
        let _enter = span.enter();

        let cancel = ctx.cancel.clone();
        let lint_results = run_workers(tasks, ctx);
        let processed = process_lint_results(Arc::clone(&self.processors), lint_results);

        if !cancel.is_cancelled() {
            return collect_issues(processed);
        }

        collect_issues(drain_after_deadline(processed, tasks.len()))
    }
}

/// Waits for every processed result, reports how many linters finished and
/// hands the results back for collection.
fn drain_after_deadline(processed: Receiver<LintResult>, total: usize) -> Receiver<LintResult> {
    // Always process issues, even if the deadline was exceeded.
    let finished: Vec<LintResult> = processed.iter().collect();
    error!("{}", deadline_exceeded_message(finished.len(), total));

    let (tx, replay) = crossbeam_channel::unbounded();
    for res in finished {
        let _ = tx.send(res);
    }
    replay
}

/// The advisory logged when the run deadline was exceeded.
pub fn deadline_exceeded_message(finished: usize, total: usize) -> String {
    format!(
        "{finished}/{total} linters finished: deadline exceeded: try increase it by passing --deadline option"
    )
}

/// Flattens processed results into a single ordered issue stream.
pub fn collect_issues(results: Receiver<LintResult>) -> Receiver<Issue> {
    let (tx, rx) = crossbeam_channel::bounded(ISSUES_CAPACITY);
    let dispatch = tracing::dispatcher::get_default(Dispatch::clone);

    let spawned = thread::Builder::new()
        .name("collector".to_string())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                for res in results.iter() {
                    for issue in res.issues {
                        if tx.send(issue).is_err() {
                            return;
                        }
                    }
                }
            })
        });

    if let Err(e) = spawned {
        error!("Failed to spawn collector thread: {}", e);
    }

    rx
}
