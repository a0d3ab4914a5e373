use metalint_core::{Issue, LintContext, Linter, LinterError, Position, Severity};

use super::scan_lines;

const MARKERS: &[&str] = &["TODO", "FIXME", "XXX"];

/// Reports TODO, FIXME and XXX markers.
pub struct Todo;

impl Linter for Todo {
    fn name(&self) -> &str {
        "todo"
    }

    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        scan_lines(ctx, |path, line_no, line| {
            MARKERS.iter().find_map(|marker| {
                find_word(line, marker).map(|col| {
                    Issue::new(
                        format!("Line contains {marker}"),
                        Position::new(path, line_no, col + 1),
                    )
                    .with_severity(Severity::Info)
                })
            })
        })
    }
}

/// Byte offset of `word` in `line` when it is not part of a longer identifier.
fn find_word(line: &str, word: &str) -> Option<usize> {
    line.match_indices(word).map(|(i, _)| i).find(|&i| {
        let before = line[..i].chars().next_back();
        let after = line[i + word.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
