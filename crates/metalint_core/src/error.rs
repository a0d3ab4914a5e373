//! Error types for linters, processors and configuration.

use thiserror::Error;

/// Errors produced while running a single linter.
///
/// These never escape the runner: the worker that ran the linter logs them
/// and the linter's issues are discarded.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The linter panicked and the panic was recovered.
    #[error("panic occurred: {0}")]
    Panic(String),

    /// The linter reported a failure.
    #[error("{0}")]
    Failed(String),

    /// I/O error while reading sources.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The linter stopped because the run was cancelled.
    #[error("cancelled")]
    Cancelled,
}

impl LinterError {
    /// Creates a generic linter failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Returns true if this error is a recovered panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }
}

/// Errors produced by a processor while transforming one issue set.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// I/O error while inspecting a source file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid pattern.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl ProcessorError {
    /// Creates an I/O error bound to a path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a generic processor failure.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Errors that can occur while loading configuration or building the
/// processor chain from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("Invalid config: {0}")]
    Parse(String),

    /// A regular expression in the configuration does not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
