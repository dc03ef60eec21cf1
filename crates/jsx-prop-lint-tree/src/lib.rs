//! Syntax tree model for jsx-prop-lint
//!
//! This crate does not parse markup. An external parser dumps the elements it
//! found as JSON, and this crate turns that dump plus the original source text
//! into a [`Document`] that lint rules can walk.
//!
//! # Tree format
//!
//! ```json
//! {
//!   "file": "Card.jsx",
//!   "elements": [
//!     {
//!       "name": "Card",
//!       "span": { "start": 0, "end": 33 },
//!       "attributes": [
//!         { "kind": "plain", "name": "b", "span": { "start": 6, "end": 11 } },
//!         { "kind": "spread", "span": { "start": 12, "end": 21 } }
//!       ],
//!       "children": []
//!     }
//!   ]
//! }
//! ```
//!
//! `file` is resolved relative to the directory of the tree file.
//!
//! # Quick Start
//!
//! ```
//! use jsx_prop_lint_tree::parse_document;
//!
//! let source = "<Card b={1} {...rest} />";
//! let tree = r#"{"elements": [{"name": "Card", "span": {"start": 0, "end": 24},
//!     "attributes": [
//!         {"kind": "plain", "name": "b", "span": {"start": 6, "end": 11}},
//!         {"kind": "spread", "span": {"start": 12, "end": 21}}
//!     ]}]}"#;
//!
//! let doc = parse_document(source, tree).unwrap();
//! let card = doc.all_elements().next().unwrap();
//! assert_eq!(doc.text(card.attributes[1].span), "{...rest}");
//! ```

pub mod ast;
pub mod error;
pub mod testing;

pub use ast::{AllElements, Attribute, AttributeKind, Document, Element, Position, Span};
pub use error::TreeError;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TreeFile {
    #[serde(default)]
    file: Option<PathBuf>,
    #[serde(default)]
    elements: Vec<Element>,
}

/// Build a document from source text and its JSON tree
pub fn parse_document(source: &str, tree_json: &str) -> Result<Document, TreeError> {
    let tree: TreeFile = serde_json::from_str(tree_json)?;
    validate_elements(source, &tree.elements)?;
    Ok(Document::new(source, tree.elements))
}

/// Load a tree file from disk along with the source file it names
pub fn load_document(tree_path: &Path) -> Result<Document, TreeError> {
    let mut tree = read_tree(tree_path)?;

    let file = tree.file.take().ok_or_else(|| TreeError::MissingSource {
        path: tree_path.to_path_buf(),
    })?;
    let source_path = match tree_path.parent() {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file,
    };

    into_document(tree, source_path)
}

/// Load a tree file and pair it with an explicit source file
///
/// The `file` entry of the tree, if any, is ignored.
pub fn load_document_with_source(
    tree_path: &Path,
    source_path: &Path,
) -> Result<Document, TreeError> {
    let tree = read_tree(tree_path)?;
    into_document(tree, source_path.to_path_buf())
}

fn read_tree(tree_path: &Path) -> Result<TreeFile, TreeError> {
    let tree_json = read(tree_path)?;
    Ok(serde_json::from_str(&tree_json)?)
}

fn into_document(tree: TreeFile, source_path: PathBuf) -> Result<Document, TreeError> {
    log::debug!(
        "loading {} element(s) for {}",
        tree.elements.len(),
        source_path.display()
    );

    let source = read(&source_path)?;
    validate_elements(&source, &tree.elements)?;

    Ok(Document::new(source, tree.elements).with_path(source_path))
}

fn read(path: &Path) -> Result<String, TreeError> {
    fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Check the spans handed over by the parser against the source text
fn validate_elements(source: &str, elements: &[Element]) -> Result<(), TreeError> {
    for element in elements {
        validate_span(source, element.span)?;

        let mut previous_end = None;
        for attribute in &element.attributes {
            validate_span(source, attribute.span)?;

            if previous_end.is_some_and(|end| attribute.span.start < end) {
                return Err(TreeError::UnorderedAttributes {
                    element: element.display_name().to_string(),
                    start: attribute.span.start,
                    end: attribute.span.end,
                });
            }
            previous_end = Some(attribute.span.end);
        }

        validate_elements(source, &element.children)?;
    }
    Ok(())
}

fn validate_span(source: &str, span: Span) -> Result<(), TreeError> {
    let Span { start, end } = span;
    if start > end {
        return Err(TreeError::InvertedSpan { start, end });
    }
    if end > source.len() {
        return Err(TreeError::OutOfBounds {
            start,
            end,
            len: source.len(),
        });
    }
    if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
        return Err(TreeError::NotCharBoundary { start, end });
    }
    Ok(())
}
