use super::sorted_by_location;
use crate::LintError;
use crate::Severity;
use std::path::Path;

pub(crate) fn report(errors: &[LintError], path: &Path) {
    for line in format(errors, path) {
        println!("{}", line);
    }
}

pub(crate) fn format(errors: &[LintError], path: &Path) -> Vec<String> {
    let path_str = path.display();

    sorted_by_location(errors)
        .into_iter()
        .map(|error| {
            let level = match error.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            let mut params = format!("file={}", path_str);
            if let Some(line) = error.line {
                params.push_str(&format!(",line={}", line));
            }
            if let Some(col) = error.column {
                params.push_str(&format!(",col={}", col));
            }
            params.push_str(&format!(",title={}/{}", error.category, error.rule));

            format!("::{} {}::{}", level, params, error.message)
        })
        .collect()
}
