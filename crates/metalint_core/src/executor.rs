//! Panic-safe execution of a single linter.

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

use tracing::{info_span, warn};

use crate::error::LinterError;
use crate::issue::Issue;
use crate::linter::{LintContext, LinterTask};

/// Runs one linter, converting a panic into [`LinterError::Panic`].
///
/// On success every issue is tagged with the linter's name. On failure no
/// issues are returned.
pub fn run_linter_safe(task: &LinterTask, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
    let name = task.name();
    let span = info_span!("linter", name = %name);
    let _enter = span.enter();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| task.linter.run(ctx)));

    let mut issues = match outcome {
        Ok(result) => result?,
        Err(payload) => {
            warn!("Panic stack trace: {}", Backtrace::force_capture());
            return Err(LinterError::Panic(panic_message(payload.as_ref())));
        }
    };

    for issue in &mut issues {
        issue.from_linter = name.to_string();
    }

    Ok(issues)
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
