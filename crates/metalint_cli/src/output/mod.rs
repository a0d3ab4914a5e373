//! Output formatting module

mod json;
mod text;

use metalint_core::Issue;
use miette::Result;

use crate::cli::OutputFormat;

/// Prints `issues` and returns whether any were found.
pub fn output_issues(issues: &[Issue], format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => json::output_json(issues)?,
        OutputFormat::Text => text::output_text(issues),
    }

    Ok(!issues.is_empty())
}
