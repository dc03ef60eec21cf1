//! Syntax tree types for markup elements
//!
//! Nodes only carry byte spans. All text is read back from the [`Document`]
//! source, so fixes reproduce each attribute exactly as it was written.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source position in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize, // Byte offset for editing
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Half-open byte range `[start, end)` into the document source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Whether an attribute can be moved around inside its element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// `name="value"`, `name={expr}` or a bare `name`
    Plain,
    /// `{...props}`, merged at runtime
    Spread,
}

/// One entry in an element's attribute list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub span: Span,
}

impl Attribute {
    pub fn plain(name: &str, span: Span) -> Self {
        Self {
            kind: AttributeKind::Plain,
            name: Some(name.to_string()),
            span,
        }
    }

    pub fn spread(span: Span) -> Self {
        Self {
            kind: AttributeKind::Spread,
            name: None,
            span,
        }
    }

    pub fn is_spread(&self) -> bool {
        self.kind == AttributeKind::Spread
    }

    /// Attribute name, or `None` for spreads and nameless entries
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            AttributeKind::Plain => self.name.as_deref(),
            AttributeKind::Spread => None,
        }
    }

    /// Check if this attribute has a specific name
    pub fn is(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    /// Span of the attribute name, which always opens a plain attribute
    pub fn name_span(&self) -> Span {
        match self.name() {
            Some(name) => Span::new(self.span.start, (self.span.start + name.len()).min(self.span.end)),
            None => self.span,
        }
    }
}

/// A markup element (the opening tag carries the attributes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub span: Span,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// Source text together with the elements parsed from it
#[derive(Debug, Clone, Default)]
pub struct Document {
    path: Option<PathBuf>,
    source: String,
    elements: Vec<Element>,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(source: impl Into<String>, elements: Vec<Element>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path: None,
            source,
            elements,
            line_starts,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Path of the source file, when the document was loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns an iterator over all elements recursively, in document order
    pub fn all_elements(&self) -> AllElements<'_> {
        AllElements::new(&self.elements)
    }

    /// Verbatim source text covered by `span`
    ///
    /// Spans are validated when a document is loaded; an invalid span yields
    /// an empty string rather than a panic.
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    /// Convert a byte offset into a 1-based line/column position
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);

        Position::new(line_idx + 1, column + 1, offset)
    }
}

/// Depth-first iterator over elements and their children
pub struct AllElements<'a> {
    stack: Vec<std::slice::Iter<'a, Element>>,
}

impl<'a> AllElements<'a> {
    fn new(elements: &'a [Element]) -> Self {
        Self {
            stack: vec![elements.iter()],
        }
    }
}

impl<'a> Iterator for AllElements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            if let Some(element) = iter.next() {
                if !element.children.is_empty() {
                    self.stack.push(element.children.iter());
                }
                return Some(element);
            }
            self.stack.pop();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, children: Vec<Element>) -> Element {
        Element {
            name: Some(name.to_string()),
            children,
            ..Element::default()
        }
    }

    #[test]
    fn test_position_first_line() {
        let doc = Document::new("<A b />", vec![]);
        assert_eq!(doc.position(0), Position::new(1, 1, 0));
        assert_eq!(doc.position(3), Position::new(1, 4, 3));
    }

    #[test]
    fn test_position_later_lines() {
        let doc = Document::new("<A\n  b\n  c />", vec![]);
        assert_eq!(doc.position(5), Position::new(2, 3, 5));
        assert_eq!(doc.position(3), Position::new(2, 1, 3));
        assert_eq!(doc.position(9), Position::new(3, 3, 9));
    }

    #[test]
    fn test_position_counts_characters() {
        let doc = Document::new("<A é b />", vec![]);
        // 'é' is two bytes, 'b' starts at byte 6
        assert_eq!(doc.position(6), Position::new(1, 6, 6));
    }

    #[test]
    fn test_text_out_of_range_is_empty() {
        let doc = Document::new("<A />", vec![]);
        assert_eq!(doc.text(Span::new(1, 2)), "A");
        assert_eq!(doc.text(Span::new(3, 40)), "");
    }

    #[test]
    fn test_all_elements_depth_first() {
        let doc = Document::new(
            "",
            vec![
                element("A", vec![element("B", vec![element("C", vec![])])]),
                element("D", vec![]),
            ],
        );

        let names: Vec<_> = doc.all_elements().map(|e| e.display_name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_spread_has_no_name() {
        let spread = Attribute {
            kind: AttributeKind::Spread,
            name: Some("rest".to_string()),
            span: Span::new(0, 9),
        };
        assert_eq!(spread.name(), None);
        assert!(!spread.is("rest"));
        assert_eq!(spread.name_span(), Span::new(0, 9));
    }

    #[test]
    fn test_name_span() {
        let attr = Attribute::plain("templateName", Span::new(4, 24));
        assert_eq!(attr.name_span(), Span::new(4, 16));
    }
}
