//! JSON output formatter

use metalint_core::Issue;
use miette::{IntoDiagnostic, Result};

pub fn output_json(issues: &[Issue]) -> Result<()> {
    println!("{}", render_json(issues)?);
    Ok(())
}

fn render_json(issues: &[Issue]) -> Result<String> {
    let output = serde_json::json!({
        "issues": issues,
        "total": issues.len(),
    });
    serde_json::to_string_pretty(&output).into_diagnostic()
}
