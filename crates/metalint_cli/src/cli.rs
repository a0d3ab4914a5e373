//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// metalint - run many linters at once
#[derive(Parser)]
#[command(name = "metalint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files or directories to lint
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Number of linters run in parallel
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,

        /// Deadline for the whole run, in seconds (0 disables it)
        #[arg(long)]
        deadline: Option<u64>,

        /// Enable only the given linter (repeatable)
        #[arg(short = 'E', long = "enable", value_name = "LINTER")]
        enable: Vec<String>,

        /// Disable the given linter (repeatable)
        #[arg(short = 'D', long = "disable", value_name = "LINTER")]
        disable: Vec<String>,
    },

    /// List built-in linters
    Linters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
