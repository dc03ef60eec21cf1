mod errorformat;
mod github_actions;
mod json;

use crate::LintError;
use crate::config::ColorConfig;
use std::cmp::Ordering;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `file:line:col: severity[category/rule]: message`
    #[default]
    #[cfg_attr(feature = "cli", value(name = "text"))]
    ErrorFormat,
    Json,
    GithubActions,
}

pub struct Reporter {
    format: OutputFormat,
    colors: ColorConfig,
}

impl Reporter {
    pub fn with_colors(format: OutputFormat, colors: ColorConfig) -> Self {
        Self { format, colors }
    }

    pub fn report(&self, errors: &[LintError], path: &Path) {
        match self.format {
            OutputFormat::ErrorFormat => errorformat::report(errors, path, &self.colors),
            OutputFormat::Json => json::report(errors, path),
            OutputFormat::GithubActions => github_actions::report(errors, path),
        }
    }
}

/// Errors ordered by line, then column; errors without a location go last
fn sorted_by_location(errors: &[LintError]) -> Vec<&LintError> {
    let mut sorted: Vec<_> = errors.iter().collect();
    sorted.sort_by(|a, b| {
        compare_optional(a.line, b.line).then_with(|| compare_optional(a.column, b.column))
    });
    sorted
}

fn compare_optional(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
fn make_error(
    message: &str,
    severity: crate::Severity,
    line: Option<usize>,
    column: Option<usize>,
) -> LintError {
    let mut error = LintError::new("jsx-sort-props", "style", message, severity);
    error.line = line;
    error.column = column;
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_sorted_by_location() {
        let errors = vec![
            make_error("none", Severity::Error, None, None),
            make_error("third", Severity::Error, Some(10), Some(1)),
            make_error("first", Severity::Warning, Some(1), Some(5)),
            make_error("second", Severity::Error, Some(1), Some(10)),
        ];

        let messages: Vec<_> = sorted_by_location(&errors)
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third", "none"]);
    }
}
