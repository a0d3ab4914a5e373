//! Shared helpers for runner integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use metalint_core::{
    CancellationToken, Issue, LintContext, Linter, LinterError, LinterTask, Position,
};

/// What a scripted linter does when run.
#[derive(Clone)]
pub enum Behavior {
    /// Reports `n` issues on lines 1..=n of `file`, after `delay`.
    Report {
        file: String,
        n: usize,
        delay: Duration,
    },
    /// Returns an error.
    Fail(String),
    /// Panics.
    Crash(String),
}

pub fn report(file: &str, n: usize) -> Behavior {
    slow_report(file, n, Duration::ZERO)
}

pub fn slow_report(file: &str, n: usize, delay: Duration) -> Behavior {
    Behavior::Report {
        file: file.to_string(),
        n,
        delay,
    }
}

pub fn fail(msg: &str) -> Behavior {
    Behavior::Fail(msg.to_string())
}

pub fn crash(msg: &str) -> Behavior {
    Behavior::Crash(msg.to_string())
}

pub struct ScriptedLinter {
    name: String,
    behavior: Behavior,
}

impl Linter for ScriptedLinter {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, _ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        match &self.behavior {
            Behavior::Report { file, n, delay } => {
                if !delay.is_zero() {
                    std::thread::sleep(*delay);
                }
                Ok(issues(file, *n))
            }
            Behavior::Fail(msg) => Err(LinterError::failed(msg.clone())),
            Behavior::Crash(msg) => panic!("{}", msg),
        }
    }
}

fn issues(file: &str, n: usize) -> Vec<Issue> {
    (1..=n)
        .map(|line| Issue::new(format!("problem on line {line}"), Position::new(file, line, 1)))
        .collect()
}

pub fn task(name: &str, speed: u32, behavior: Behavior) -> LinterTask {
    LinterTask::new(
        Arc::new(ScriptedLinter {
            name: name.to_string(),
            behavior,
        }),
        speed,
    )
}

pub fn context(concurrency: usize, cancel: CancellationToken) -> Arc<LintContext> {
    Arc::new(LintContext::new(".", Vec::new(), cancel).with_concurrency(concurrency))
}
