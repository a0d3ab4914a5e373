//! Text output formatter

use std::collections::BTreeMap;

use metalint_core::{Issue, Severity};

pub fn output_text(issues: &[Issue]) {
    for issue in issues {
        println!("{}", format_issue(issue));
    }

    println!();
    println!("{}", summary(issues));
}

fn format_issue(issue: &Issue) -> String {
    let severity = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    let location = if issue.pos.column > 0 {
        format!(
            "{}:{}:{}",
            issue.pos.filename.display(),
            issue.pos.line,
            issue.pos.column
        )
    } else {
        format!("{}:{}", issue.pos.filename.display(), issue.pos.line)
    };
    format!(
        "{}: {} {} ({})",
        location, severity, issue.text, issue.from_linter
    )
}

fn summary(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found".to_string();
    }

    let mut per_linter: BTreeMap<&str, usize> = BTreeMap::new();
    for issue in issues {
        *per_linter.entry(issue.from_linter.as_str()).or_default() += 1;
    }
    let breakdown = per_linter
        .iter()
        .map(|(linter, n)| format!("{linter}: {n}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Found {} issues ({})", issues.len(), breakdown)
}

#[cfg(test)]
mod tests {
    use metalint_core::Position;

    use super::*;

    fn issue(linter: &str, line: usize, column: usize) -> Issue {
        let mut issue = Issue::new("Trailing whitespace", Position::new("src/a.rs", line, column))
            .with_severity(Severity::Warning);
        issue.from_linter = linter.to_string();
        issue
    }

    #[test]
    fn test_format_issue() {
        assert_eq!(
            format_issue(&issue("trailing-whitespace", 3, 7)),
            "src/a.rs:3:7: warning Trailing whitespace (trailing-whitespace)"
        );
        assert_eq!(
            format_issue(&issue("trailing-whitespace", 3, 0)),
            "src/a.rs:3: warning Trailing whitespace (trailing-whitespace)"
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(&[]), "No issues found");
        assert_eq!(
            summary(&[issue("b", 1, 1), issue("a", 2, 1), issue("b", 3, 1)]),
            "Found 3 issues (a: 1, b: 2)"
        );
    }
}
