//! Applies the processor chain to lint results as they arrive.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use tracing::{Dispatch, error, info_span, warn};

use crate::issue::Issue;
use crate::processors::Processor;
use crate::result::LintResult;
use crate::timing::Stopwatch;

/// Ordered processors, shared between runs of the same runner.
pub type ProcessorChain = Arc<Mutex<Vec<Box<dyn Processor>>>>;

const PROCESSED_CAPACITY: usize = 64;

/// Spawns the processing thread.
///
/// Results are consumed in arrival order. Failed and empty results are
/// dropped; the rest are forwarded with processed issues. Once `raw` is
/// exhausted every processor is finished in chain order.
pub fn process_lint_results(chain: ProcessorChain, raw: Receiver<LintResult>) -> Receiver<LintResult> {
    let (tx, rx) = crossbeam_channel::bounded(PROCESSED_CAPACITY);
    let dispatch = tracing::dispatcher::get_default(Dispatch::clone);

    let spawned = thread::Builder::new()
        .name("processing".to_string())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                let mut sw = Stopwatch::new("processing");
                let mut processors = chain.lock();

                for mut res in raw.iter() {
                    if let Some(err) = &res.error {
                        warn!("Can't run linter {}: {}", res.task.name(), err);
                        continue;
                    }
                    if res.issues.is_empty() {
                        continue;
                    }

                    res.issues = process_issues(&mut processors, std::mem::take(&mut res.issues), &mut sw);
                    // Keep draining even if nobody listens, so workers never block.
                    let _ = tx.send(res);
                }

                // Finalize processors: logging and clearing, no heavy work here.
                for p in processors.iter_mut() {
                    let name = p.name().to_string();
                    sw.track_stage(&name, || p.finish());
                }

                sw.print_stages();
            })
        });

    if let Err(e) = spawned {
        error!("Failed to spawn processing thread: {}", e);
    }

    rx
}

/// Runs `issues` through every processor in order.
///
/// A failing processor is skipped: its input is passed on unchanged.
pub fn process_issues(
    processors: &mut [Box<dyn Processor>],
    mut issues: Vec<Issue>,
    sw: &mut Stopwatch,
) -> Vec<Issue> {
    for p in processors.iter_mut() {
        let name = p.name().to_string();
        let span = info_span!("processor", name = %name);
        let _enter = span.enter();

        // Keep a copy so a failure can fall back to this stage's input.
        let input = issues.clone();
        match sw.track_stage(&name, || p.process(input)) {
            Ok(processed) => issues = processed,
            Err(e) => warn!("Can't process result by {} processor: {}", name, e),
        }
    }

    issues
}
