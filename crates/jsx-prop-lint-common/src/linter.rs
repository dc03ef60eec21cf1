use jsx_prop_lint_tree::{Document, Element};
use serde::Serialize;

/// Categories a rule can belong to, in display order
pub const RULE_CATEGORIES: &[&str] = &["style"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Parse a severity name as written in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Replacement of one byte range of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Start byte offset (0-indexed, inclusive)
    pub start_offset: usize,
    /// End byte offset (0-indexed, exclusive)
    pub end_offset: usize,
    /// Text that replaces the range
    pub new_text: String,
}

impl Fix {
    /// Create a fix that replaces bytes from start to end offset
    pub fn replace_range(start_offset: usize, end_offset: usize, new_text: &str) -> Self {
        Self {
            start_offset,
            end_offset,
            new_text: new_text.to_string(),
        }
    }

    /// Check whether two fixes touch a common byte
    pub fn overlaps(&self, other: &Fix) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LintError {
    pub rule: String,
    pub category: String,
    pub message: String,
    pub severity: Severity,
    pub line: Option<usize>,
    pub column: Option<usize>,
    /// Byte offset of the anchor node, used for ordering
    #[serde(skip)]
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl LintError {
    pub fn new(rule: &str, category: &str, message: &str, severity: Severity) -> Self {
        Self {
            rule: rule.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            severity,
            line: None,
            column: None,
            offset: 0,
            fix: None,
        }
    }

    /// Anchor the error at a byte offset of the document
    pub fn at_offset(mut self, document: &Document, offset: usize) -> Self {
        let position = document.position(offset);
        self.offset = offset;
        self.with_location(position.line, position.column)
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// A lint rule, visited by the [`Linter`] once per node kind it cares about
pub trait LintRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Check one element node
    ///
    /// Called for every element of the document, nested ones included.
    fn check_element(&self, element: &Element, document: &Document) -> Vec<LintError>;

    /// Get detailed explanation of why this rule exists
    fn why(&self) -> Option<&str> {
        None
    }

    /// Get example of bad markup
    fn bad_example(&self) -> Option<&str> {
        None
    }

    /// Get example of good markup
    fn good_example(&self) -> Option<&str> {
        None
    }

    /// Get reference URLs
    fn references(&self) -> Option<Vec<String>> {
        None
    }
}

/// Basic Linter that holds rules and runs them
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Get a reference to all rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Visit every element of the document with every rule
    ///
    /// Errors come back in source order.
    pub fn lint(&self, document: &Document) -> Vec<LintError> {
        let mut errors: Vec<LintError> = document
            .all_elements()
            .flat_map(|element| {
                self.rules
                    .iter()
                    .flat_map(move |rule| rule.check_element(element, document))
            })
            .collect();

        errors.sort_by_key(|e| e.offset);
        log::debug!(
            "{} rule(s) reported {} error(s)",
            self.rules.len(),
            errors.len()
        );
        errors
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsx_prop_lint_tree::testing::SourceBuilder;

    /// Reports every element that has no attributes
    struct NoAttributes;

    impl LintRule for NoAttributes {
        fn name(&self) -> &'static str {
            "no-attributes"
        }

        fn category(&self) -> &'static str {
            "style"
        }

        fn description(&self) -> &'static str {
            "Reports bare elements"
        }

        fn check_element(&self, element: &Element, document: &Document) -> Vec<LintError> {
            if !element.attributes.is_empty() {
                return Vec::new();
            }
            vec![
                LintError::new(self.name(), self.category(), "bare", Severity::Warning)
                    .at_offset(document, element.span.start),
            ]
        }
    }

    #[test]
    fn test_lint_visits_every_element() {
        let doc = SourceBuilder::new()
            .open("A")
            .close(" />")
            .text("\n")
            .open("B")
            .attr("b", "b")
            .close(" />")
            .text("\n")
            .open("C")
            .close(" />")
            .build();

        let mut linter = Linter::new();
        linter.add_rule(Box::new(NoAttributes));
        let errors = linter.lint(&doc);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[1].line, Some(3));
        assert_eq!(errors[1].column, Some(1));
    }

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("error"), Some(Severity::Error));
        assert_eq!(Severity::from_name("warning"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("fatal"), None);
    }

    #[test]
    fn test_fix_overlaps() {
        let a = Fix::replace_range(0, 10, "");
        assert!(a.overlaps(&Fix::replace_range(9, 12, "")));
        assert!(!a.overlaps(&Fix::replace_range(10, 12, "")));
    }
}
