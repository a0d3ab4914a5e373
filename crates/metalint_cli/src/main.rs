//! metalint CLI
//!
//! Runs a set of linters concurrently and prints their merged issues.

mod cli;
mod commands;
mod discovery;
mod linters;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::lint::{LintOverrides, run_lint};
use crate::commands::linters::run_linters;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_issues) => {
            if has_issues {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint {
            paths,
            format,
            concurrency,
            deadline,
            enable,
            disable,
        } => run_lint(
            cli,
            paths,
            *format,
            LintOverrides {
                concurrency: *concurrency,
                deadline: *deadline,
                enable: enable.clone(),
                disable: disable.clone(),
            },
        ),
        Commands::Linters => run_linters().map(|_| false),
    }
}
