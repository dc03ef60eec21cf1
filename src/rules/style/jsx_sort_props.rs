mod groups;
mod patch;

use crate::config::RuleConfig;
use crate::docs::RuleDoc;
use crate::linter::{Fix, LintError, LintRule, Severity};
use crate::tree::{Attribute, Document, Element};
use groups::{sort_group, sortable_groups};
use patch::{collect_edits, merge_edits};

/// Attribute required to come first when nothing else is configured
pub const DEFAULT_FIRST: &str = "templateName";

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "jsx-sort-props",
    category: "style",
    description: "Enforces templateName to be the first prop",
    severity: "warning",
    why: r#"Components that take a templateName prop are easier to scan when
the template is named before anything else.

Props are only moved within a run of plain props. A spread such as
{...props} can be overridden by the props that follow it, so moving a
prop across a spread could change the rendered result. A templateName
that follows a spread is therefore left where it is."#,
    bad_example: include_str!("jsx_sort_props/bad.jsx"),
    good_example: include_str!("jsx_sort_props/good.jsx"),
    references: &[],
};

/// Require one attribute name to come first in every run of props
pub struct JsxSortProps {
    first: String,
    severity: Severity,
}

impl Default for JsxSortProps {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST)
    }
}

impl JsxSortProps {
    pub fn new(first: &str) -> Self {
        Self {
            first: first.to_string(),
            severity: Severity::Warning,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Create from the `[rules.jsx-sort-props]` section, if any
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let first = config
            .and_then(|c| c.first.as_deref())
            .unwrap_or(DEFAULT_FIRST);
        let severity = config
            .and_then(|c| c.severity())
            .unwrap_or(Severity::Warning);
        Self::new(first).with_severity(severity)
    }

    /// Name of the attribute that must come first
    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Reorder every run of the element so the distinguished prop leads it
    ///
    /// Returns `None` when no run changes.
    pub fn fix(&self, element: &Element, document: &Document) -> Option<Fix> {
        let groups = sortable_groups(&element.attributes);
        let sorted_groups: Vec<_> = groups
            .iter()
            .map(|group| sort_group(group, &self.first))
            .collect();

        let edits = collect_edits(document, &groups, &sorted_groups);
        merge_edits(document.source(), edits)
    }
}

/// First attribute named `first` that is not at the head of its run
///
/// A spread restarts the count, so nothing is ever compared across it.
fn find_misplaced<'a>(attributes: &'a [Attribute], first: &str) -> Option<&'a Attribute> {
    let mut run_index = 0;
    for attribute in attributes {
        if attribute.is_spread() {
            run_index = 0;
            continue;
        }
        if attribute.is(first) && run_index != 0 {
            return Some(attribute);
        }
        run_index += 1;
    }
    None
}

impl LintRule for JsxSortProps {
    fn name(&self) -> &'static str {
        "jsx-sort-props"
    }

    fn category(&self) -> &'static str {
        "style"
    }

    fn description(&self) -> &'static str {
        "Enforces templateName to be the first prop"
    }

    fn check_element(&self, element: &Element, document: &Document) -> Vec<LintError> {
        let Some(misplaced) = find_misplaced(&element.attributes, &self.first) else {
            return Vec::new();
        };

        let message = format!("'{}' should be the first prop", self.first);
        let mut error = LintError::new(self.name(), self.category(), &message, self.severity)
            .at_offset(document, misplaced.name_span().start);

        match self.fix(element, document) {
            Some(fix) => error = error.with_fix(fix),
            None => log::debug!(
                "no fix for <{}> at offset {}",
                element.display_name(),
                element.span.start
            ),
        }

        vec![error]
    }

    fn why(&self) -> Option<&str> {
        Some(DOC.why)
    }

    fn bad_example(&self) -> Option<&str> {
        Some(DOC.bad_example)
    }

    fn good_example(&self) -> Option<&str> {
        Some(DOC.good_example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixer::apply_fixes_to_content;
    use crate::tree::testing::SourceBuilder;
    use pretty_assertions::assert_eq;

    fn check(document: &Document) -> Vec<LintError> {
        let rule = JsxSortProps::default();
        document
            .all_elements()
            .flat_map(|element| rule.check_element(element, document))
            .collect()
    }

    fn fixed(document: &Document) -> String {
        let errors = check(document);
        let fixes: Vec<_> = errors.iter().filter_map(|e| e.fix.as_ref()).collect();
        apply_fixes_to_content(document.source(), &fixes).0
    }

    #[test]
    fn test_first_prop_is_fine() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("templateName", "templateName=\"card\"")
            .attr("b", "b={1}")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_no_attributes() {
        let doc = SourceBuilder::new().open("br").close(" />").build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_absent_prop_is_fine() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b")
            .attr("a", "a")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_reports_misplaced_prop() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b={1}")
            .attr("templateName", "templateName=\"card\"")
            .attr("a", "a")
            .close(" />")
            .build();

        let errors = check(&doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "jsx-sort-props");
        assert_eq!(errors[0].message, "'templateName' should be the first prop");
        assert_eq!(errors[0].severity, Severity::Warning);
        // Anchored at the name of the misplaced attribute
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[0].column, Some(13));
    }

    #[test]
    fn test_fix_spans_whole_run() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b={1}")
            .attr("templateName", "templateName=\"card\"")
            .attr("a", "a")
            .close(" />")
            .build();
        let attributes = &doc.elements()[0].attributes;

        let errors = check(&doc);
        let fix = errors[0].fix.as_ref().unwrap();
        assert_eq!(fix.start_offset, attributes[0].span.start);
        assert_eq!(fix.end_offset, attributes[2].span.end);
        assert_eq!(fix.new_text, "templateName=\"card\" b={1} a");
    }

    #[test]
    fn test_fix_preserves_whitespace_between_props() {
        let doc = SourceBuilder::new()
            .open("Card")
            .text("\n ")
            .attr("b", "b={1}")
            .text("\n ")
            .attr("templateName", "templateName=\"card\"")
            .text("\n")
            .close("/>")
            .build();

        assert_eq!(
            fixed(&doc),
            "<Card\n  templateName=\"card\"\n  b={1}\n/>"
        );
    }

    #[test]
    fn test_leading_spread_is_ignored() {
        let doc = SourceBuilder::new()
            .open("Card")
            .spread("{...rest}")
            .attr("templateName", "templateName=\"card\"")
            .attr("b", "b")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_prop_first_then_spread() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("templateName", "templateName=\"card\"")
            .spread("{...rest}")
            .attr("b", "b")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_prop_after_spread_is_not_moved() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b")
            .spread("{...rest}")
            .attr("templateName", "templateName=\"card\"")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_misplaced_in_later_run() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("a", "a")
            .spread("{...rest}")
            .attr("b", "b")
            .attr("templateName", "templateName=\"card\"")
            .close(" />")
            .build();

        let errors = check(&doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            fixed(&doc),
            "<Card a {...rest} templateName=\"card\" b />"
        );
    }

    #[test]
    fn test_fix_reorders_every_run() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("a", "a")
            .attr("templateName", "templateName=\"x\"")
            .spread("{...rest}")
            .attr("b", "b")
            .attr("templateName", "templateName=\"y\"")
            .close(" />")
            .build();

        let errors = check(&doc);
        assert_eq!(errors.len(), 1, "one report per element");
        assert_eq!(errors[0].column, Some(9));

        let fix = errors[0].fix.as_ref().unwrap();
        assert_eq!(
            fix.new_text,
            "templateName=\"x\" a {...rest} templateName=\"y\" b"
        );
    }

    #[test]
    fn test_spread_text_is_untouched() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b")
            .attr("templateName", "templateName=\"card\"")
            .spread("{...{ templateName: 'other' }}")
            .attr("c", "c")
            .close(" />")
            .build();

        let output = fixed(&doc);
        let spread = doc.text(doc.elements()[0].attributes[2].span);
        assert_eq!(output.find(spread), doc.source().find(spread));
    }

    #[test]
    fn test_fix_is_idempotent() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b")
            .attr("templateName", "templateName=\"card\"")
            .close(" />")
            .build();
        assert_eq!(fixed(&doc), "<Card templateName=\"card\" b />");

        let refixed = SourceBuilder::new()
            .open("Card")
            .attr("templateName", "templateName=\"card\"")
            .attr("b", "b")
            .close(" />")
            .build();
        assert_eq!(refixed.source(), fixed(&doc));
        assert!(check(&refixed).is_empty());
    }

    #[test]
    fn test_nameless_attribute_is_not_a_violation() {
        let doc = SourceBuilder::new()
            .open("Card")
            .attr("b", "b")
            .unnamed("{/* note */}")
            .close(" />")
            .build();
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_nameless_attribute_moves_with_its_run() {
        let doc = SourceBuilder::new()
            .open("Card")
            .unnamed("{/* note */}")
            .attr("templateName", "templateName=\"card\"")
            .close(" />")
            .build();

        assert_eq!(
            fixed(&doc),
            "<Card templateName=\"card\" {/* note */} />"
        );
    }

    #[test]
    fn test_configured_first_and_severity() {
        let config = RuleConfig {
            first: Some("slot".to_string()),
            severity: Some("error".to_string()),
            ..RuleConfig::default()
        };
        let rule = JsxSortProps::from_config(Some(&config));
        assert_eq!(rule.first(), "slot");

        let doc = SourceBuilder::new()
            .open("Card")
            .attr("templateName", "templateName=\"card\"")
            .attr("slot", "slot=\"header\"")
            .close(" />")
            .build();
        let errors = rule.check_element(&doc.elements()[0], &doc);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, Severity::Error);
        assert_eq!(errors[0].message, "'slot' should be the first prop");
    }

    #[test]
    fn test_multiline_location() {
        let doc = SourceBuilder::new()
            .open("Card")
            .text("\n   ")
            .attr("b", "b")
            .text("\n   ")
            .attr("templateName", "templateName=\"card\"")
            .close(" />")
            .build();

        let errors = check(&doc);
        assert_eq!(errors[0].line, Some(3));
        assert_eq!(errors[0].column, Some(5));
    }

    #[test]
    fn test_unknown_configured_severity_falls_back() {
        let config = RuleConfig {
            severity: Some("fatal".to_string()),
            ..RuleConfig::default()
        };
        let rule = JsxSortProps::from_config(Some(&config));
        assert_eq!(rule.severity(), Severity::Warning);
        assert_eq!(rule.first(), DEFAULT_FIRST);
    }
}
