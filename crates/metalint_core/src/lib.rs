//! # metalint_core
//!
//! Execution core for metalint.
//!
//! This crate provides:
//! - The `Runner`, which runs linters on a fixed-size worker pool
//! - Panic isolation for every linter run
//! - The ordered issue processor chain
//! - Cooperative cancellation with a run deadline
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use metalint_core::{CancellationToken, Config, LintContext, Runner};
//!
//! let config = Config::from_file("metalint.json")?;
//! let runner = Runner::new(&config)?;
//! let ctx = LintContext::new(".", files, CancellationToken::new());
//!
//! for issue in runner.run(&tasks, Arc::new(ctx)) {
//!     println!("{}:{}: {}", issue.pos.filename.display(), issue.line(), issue.text);
//! }
//! ```

mod cancel;
mod config;
mod error;
mod executor;
mod issue;
mod linter;
pub mod pipeline;
pub mod processors;
mod result;
mod runner;
pub mod timing;
pub mod worker;

pub use cancel::CancellationToken;
pub use config::{Config, IssuesConfig, LintersConfig, RunConfig};
pub use error::{ConfigError, LinterError, ProcessorError};
pub use executor::run_linter_safe;
pub use issue::{Issue, Position, Severity};
pub use linter::{LintContext, Linter, LinterTask, default_concurrency};
pub use processors::Processor;
pub use result::LintResult;
pub use runner::{Runner, collect_issues, deadline_exceeded_message};
pub use timing::Stopwatch;

#[cfg(test)]
mod test_utils;
