//! Core types shared by jsx-prop-lint rules and front ends.
//!
//! # Modules
//!
//! - [`linter`]: Core lint types: [`LintRule`] trait, [`LintError`], [`Severity`], [`Fix`]
//! - [`config`]: Configuration loaded from `.jsx-prop-lint.toml` ([`LintConfig`])
//! - [`docs`]: Rule documentation ([`RuleDoc`])
//!
//! # Quick reference
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`LintRule`] | Visitor trait every rule implements, one method per node kind |
//! | [`LintError`] | A single lint diagnostic with location, severity, and optional fix |
//! | [`Severity`] | `Error` or `Warning` |
//! | [`Fix`] | A single byte-range replacement |
//! | [`LintConfig`] | Settings loaded from `.jsx-prop-lint.toml` |
//! | [`Linter`] | Walks a document and dispatches every element to every rule |
//!
//! # Re-exports
//!
//! The [`tree`] module re-exports the entire [`jsx_prop_lint_tree`] crate.

pub mod config;
pub mod docs;
pub mod linter;

// Re-export tree crate
pub use jsx_prop_lint_tree as tree;

pub use config::{
    CONFIG_FILE_NAME, Color, ColorConfig, ColorMode, ConfigError, DEFAULT_CONFIG_TEMPLATE,
    LintConfig, RuleConfig,
};
pub use docs::RuleDoc;
pub use linter::{Fix, LintError, LintRule, Linter, RULE_CATEGORIES, Severity};
pub use jsx_prop_lint_tree::{
    Document, load_document, load_document_with_source, parse_document,
};
