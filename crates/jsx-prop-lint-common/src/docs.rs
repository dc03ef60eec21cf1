//! Rule documentation types for jsx-prop-lint
//!
//! This module provides type definitions for lint rule documentation.

/// Documentation for a lint rule
#[derive(Debug)]
pub struct RuleDoc {
    /// Rule name (e.g., "jsx-sort-props")
    pub name: &'static str,
    /// Category (e.g., "style")
    pub category: &'static str,
    /// Short description
    pub description: &'static str,
    /// Severity level
    pub severity: &'static str,
    /// Why this rule exists
    pub why: &'static str,
    /// Example of bad markup
    pub bad_example: &'static str,
    /// Example of good markup
    pub good_example: &'static str,
    /// References (URLs, documentation links)
    pub references: &'static [&'static str],
}
