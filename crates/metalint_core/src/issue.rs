//! Issue types reported by linters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Severity level for issues.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A location in a source file.
///
/// Lines are 1-indexed, columns are 1-indexed with 0 meaning "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Path of the file, as reported by the linter.
    pub filename: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, 0 if unknown).
    #[serde(default)]
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(filename: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }
}

/// A problem reported by a linter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// Name of the linter that reported this issue.
    ///
    /// Empty until the runner tags it after the linter returns.
    #[serde(default)]
    pub from_linter: String,

    /// The issue message.
    pub text: String,

    /// Where the issue was found.
    pub pos: Position,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(text: impl Into<String>, pos: Position) -> Self {
        Self {
            from_linter: String::new(),
            text: text.into(),
            pos,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the file this issue belongs to.
    pub fn file_path(&self) -> &Path {
        &self.pos.filename
    }

    /// Returns the line this issue points at.
    pub fn line(&self) -> usize {
        self.pos.line
    }
}
