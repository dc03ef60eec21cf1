//! Building a [`Linter`] loaded with the built-in rules

use crate::config::LintConfig;
use crate::rules::JsxSortProps;

pub use jsx_prop_lint_common::linter::{
    Fix, LintError, LintRule, Linter, RULE_CATEGORIES, Severity,
};

/// Linter with every built-in rule at its default settings
pub fn with_default_rules() -> Linter {
    with_config(None)
}

/// Linter with the built-in rules enabled and configured by `config`
pub fn with_config(config: Option<&LintConfig>) -> Linter {
    let mut linter = Linter::new();

    let is_enabled = |name: &str| config.is_none_or(|c| c.is_rule_enabled(name));
    let rule_config = |name: &str| config.and_then(|c| c.get_rule_config(name));

    // Style rules
    if is_enabled("jsx-sort-props") {
        linter.add_rule(Box::new(JsxSortProps::from_config(rule_config(
            "jsx-sort-props",
        ))));
    }

    log::debug!("linter loaded with {} rule(s)", linter.rules().len());
    linter
}
