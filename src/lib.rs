//! jsx-prop-lint: keeps a chosen prop first on JSX elements
//!
//! The syntax tree comes from an external parser (see [`tree`]). The linter
//! visits every element, and the `jsx-sort-props` rule reports elements whose
//! distinguished prop (default `templateName`) is not the first prop of its
//! run, together with a fix that reorders the props.
//!
//! ```
//! use jsx_prop_lint::tree::testing::SourceBuilder;
//! use jsx_prop_lint::{apply_fixes_to_content, linter};
//!
//! let doc = SourceBuilder::new()
//!     .open("Card")
//!     .attr("title", "title=\"Hi\"")
//!     .attr("templateName", "templateName=\"card\"")
//!     .close(" />")
//!     .build();
//!
//! let errors = linter::with_default_rules().lint(&doc);
//! assert_eq!(errors.len(), 1);
//!
//! let fixes: Vec<_> = errors.iter().filter_map(|e| e.fix.as_ref()).collect();
//! let (fixed, _) = apply_fixes_to_content(doc.source(), &fixes);
//! assert_eq!(fixed, "<Card templateName=\"card\" title=\"Hi\" />");
//! ```

pub mod docs;
pub mod fixer;
pub mod linter;
pub mod reporter;
pub mod rules;

pub use jsx_prop_lint_common::{config, tree};

pub use config::{Color, ColorConfig, ColorMode, ConfigError, LintConfig};
pub use fixer::{FixOutcome, apply_fixes, apply_fixes_to_content};
pub use linter::{Fix, LintError, LintRule, Linter, RULE_CATEGORIES, Severity};
pub use reporter::{OutputFormat, Reporter};
pub use tree::{Document, TreeError, load_document, load_document_with_source, parse_document};
