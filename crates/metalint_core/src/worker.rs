//! Fixed-size worker pool that runs linter tasks.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, select};
use tracing::{Dispatch, debug, error, info_span};

use crate::executor::run_linter_safe;
use crate::linter::{LintContext, LinterTask};
use crate::result::LintResult;
use crate::timing::Stopwatch;

/// Runs every task on `ctx.concurrency` worker threads.
///
/// Tasks are dispatched in ascending speed order. The returned receiver
/// yields one [`LintResult`] per task that was started and disconnects after
/// the last worker has exited.
pub fn run_workers(tasks: &[LinterTask], ctx: Arc<LintContext>) -> Receiver<LintResult> {
    let concurrency = ctx.concurrency.max(1);
    let capacity = tasks.len().max(1);
    let (task_tx, task_rx) = crossbeam_channel::bounded::<LinterTask>(capacity);
    let (result_tx, result_rx) = crossbeam_channel::bounded::<LintResult>(capacity);
    let dispatch = tracing::dispatcher::get_default(Dispatch::clone);

    let mut handles = Vec::with_capacity(concurrency);
    for i in 0..concurrency {
        let name = format!("worker.{}", i + 1);
        let worker = Worker {
            name: name.clone(),
            ctx: Arc::clone(&ctx),
            tasks: task_rx.clone(),
            results: result_tx.clone(),
        };
        let dispatch = dispatch.clone();
        let spawned = thread::Builder::new()
            .name(name)
            .spawn(move || tracing::dispatcher::with_default(&dispatch, || worker.run()));
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => error!("Failed to spawn worker.{}: {}", i + 1, e),
        }
    }
    // Workers hold the only remaining clones.
    drop(task_rx);

    for task in sorted_by_speed(tasks) {
        if task_tx.send(task).is_err() {
            // Every worker is gone; nothing would consume the rest.
            break;
        }
    }
    drop(task_tx);

    let closer = thread::Builder::new()
        .name("worker-pool".to_string())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                let finish_times: Vec<Instant> = handles
                    .into_iter()
                    .map(|handle| {
                        handle.join().unwrap_or_else(|_| {
                            error!("Worker thread panicked");
                            Instant::now()
                        })
                    })
                    .collect();
                log_workers_stat(&finish_times);
                drop(result_tx);
            })
        });
    if let Err(e) = closer {
        // The closure (and with it every sender) was dropped, so the
        // receiver still disconnects once the workers exit.
        error!("Failed to spawn worker pool closer: {}", e);
    }

    result_rx
}

/// Returns a copy of `tasks` ordered by ascending speed.
///
/// The sort is stable, so tasks with equal speed keep their input order.
pub fn sorted_by_speed(tasks: &[LinterTask]) -> Vec<LinterTask> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|task| task.speed);
    sorted
}

struct Worker {
    name: String,
    ctx: Arc<LintContext>,
    tasks: Receiver<LinterTask>,
    results: Sender<LintResult>,
}

impl Worker {
    /// Runs tasks until the queue is drained or the run is cancelled, and
    /// returns the time the worker stopped.
    fn run(self) -> Instant {
        let span = info_span!("worker", name = %self.name);
        let _enter = span.enter();

        let mut sw = Stopwatch::new(&self.name);
        let cancel = &self.ctx.cancel;
        let deadline = cancel.deadline_timer();

        loop {
            let next = select! {
                recv(cancel.cancelled()) -> _ => None,
                recv(deadline) -> _ => None,
                recv(self.tasks) -> task => task.ok(),
            };
            let Some(task) = next else { break };
            // `select!` picks among ready operations at random, so a task can
            // win even after cancellation fired.
            if cancel.is_cancelled() {
                break;
            }

            let result = sw.track_stage(task.name(), || run_linter_safe(&task, &self.ctx));
            let result = LintResult::from_run(task, result);
            if self.results.send(result).is_err() {
                debug!("Result receiver dropped, stopping");
                break;
            }
        }

        sw.print();
        Instant::now()
    }
}

/// Logs how long each worker sat idle waiting for the slowest one.
///
/// Every worker that finished last (ties included) is left out of the report.
fn log_workers_stat(finish_times: &[Instant]) {
    let Some(last) = finish_times.iter().max().copied() else {
        return;
    };

    debug!("Workers idle times: {}", idle_times_report(finish_times, last));
}

fn idle_times_report(finish_times: &[Instant], last: Instant) -> String {
    finish_times
        .iter()
        .enumerate()
        .filter(|(_, t)| **t != last)
        .map(|(i, t)| format!("#{}: {:?}", i + 1, last.duration_since(*t)))
        .collect::<Vec<_>>()
        .join(", ")
}
