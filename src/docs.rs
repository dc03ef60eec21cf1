//! Rule documentation for jsx-prop-lint
//!
//! This module collects the documentation of every built-in rule,
//! explaining why the rule exists and what the preferred markup looks like.

pub use jsx_prop_lint_common::RuleDoc;

/// Get documentation for a rule by name
pub fn get_rule_doc(name: &str) -> Option<&'static RuleDoc> {
    all_rule_docs().iter().find(|doc| doc.name == name).copied()
}

/// Get all rule documentation
pub fn all_rule_docs() -> &'static [&'static RuleDoc] {
    use crate::rules::style::jsx_sort_props;

    static DOCS: &[&RuleDoc] = &[
        // Style
        &jsx_sort_props::DOC,
    ];

    DOCS
}

/// Get all rule names
pub fn all_rule_names() -> Vec<&'static str> {
    all_rule_docs().iter().map(|doc| doc.name).collect()
}
