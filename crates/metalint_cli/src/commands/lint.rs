//! Lint command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use metalint_core::{CancellationToken, Config, Issue, LintContext, Runner};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::discovery::discover_files;
use crate::linters::builtin;
use crate::output::output_issues;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "metalint.json";

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Default)]
pub struct LintOverrides {
    pub concurrency: Option<usize>,
    pub deadline: Option<u64>,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

pub fn run_lint(
    cli: &Cli,
    paths: &[PathBuf],
    format: OutputFormat,
    overrides: LintOverrides,
) -> Result<bool> {
    let mut config = if let Some(ref path) = cli.config {
        Config::from_file(path).into_diagnostic()?
    } else {
        find_config(Path::new("."))?
    };
    apply_overrides(&mut config, overrides)?;

    let tasks: Vec<_> = builtin()
        .into_iter()
        .filter(|t| config.linters.is_enabled(t.name()))
        .collect();
    if tasks.is_empty() {
        warn!("No linters enabled");
    }

    let files = discover_files(paths, &config.run.skip_dirs)?;
    info!(
        "Linting {} files with {} linters",
        files.len(),
        tasks.len()
    );

    let cancel = match config.run.deadline() {
        Some(timeout) => CancellationToken::with_timeout(timeout),
        None => CancellationToken::new(),
    };
    let ctx = LintContext::new(".", files, cancel).with_concurrency(config.run.concurrency);

    let runner = Runner::new(&config).into_diagnostic()?;
    debug!("Processors: {}", runner.processor_names().join(", "));

    let issues: Vec<Issue> = runner.run(&tasks, Arc::new(ctx)).iter().collect();

    output_issues(&issues, format)
}

fn find_config(dir: &Path) -> Result<Config> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        info!("Using config: {}", path.display());
        return Config::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(Config::new())
}

fn apply_overrides(config: &mut Config, overrides: LintOverrides) -> Result<()> {
    let known: Vec<String> = builtin().iter().map(|t| t.name().to_string()).collect();
    for name in overrides.enable.iter().chain(&overrides.disable) {
        if !known.contains(name) {
            warn!("Unknown linter '{}'", name);
        }
    }

    if let Some(concurrency) = overrides.concurrency {
        if concurrency == 0 {
            miette::bail!("--concurrency must be at least 1");
        }
        config.run.concurrency = concurrency;
    }
    if let Some(deadline) = overrides.deadline {
        config.run.deadline = deadline;
    }
    if !overrides.enable.is_empty() {
        config.linters.enable = overrides.enable;
    }
    config.linters.disable.extend(overrides.disable);

    Ok(())
}
