use super::sorted_by_location;
use crate::LintError;
use crate::Severity;
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    file: String,
    errors: Vec<&'a LintError>,
    summary: Summary,
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    fixable: usize,
}

pub(crate) fn report(errors: &[LintError], path: &Path) {
    println!("{}", format(errors, path));
}

pub(crate) fn format(errors: &[LintError], path: &Path) -> String {
    let report = JsonReport {
        file: path.display().to_string(),
        errors: sorted_by_location(errors),
        summary: Summary {
            errors: errors
                .iter()
                .filter(|e| e.severity == Severity::Error)
                .count(),
            warnings: errors
                .iter()
                .filter(|e| e.severity == Severity::Warning)
                .count(),
            fixable: errors.iter().filter(|e| e.fix.is_some()).count(),
        },
    };

    // Only plain data is serialized, which cannot fail
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
