//! Build documents for tests without a parser
//!
//! [`SourceBuilder`] writes markup text piece by piece and records the span of
//! every element and attribute as it goes, so the resulting tree always
//! agrees with the source.
//!
//! ```
//! use jsx_prop_lint_tree::testing::SourceBuilder;
//!
//! let doc = SourceBuilder::new()
//!     .open("Card")
//!     .attr("b", "b={1}")
//!     .spread("{...rest}")
//!     .close(" />")
//!     .build();
//!
//! assert_eq!(doc.source(), "<Card b={1} {...rest} />");
//! assert_eq!(doc.elements()[0].attributes.len(), 2);
//! ```

use crate::ast::{Attribute, AttributeKind, Document, Element, Span};

#[derive(Debug, Default)]
pub struct SourceBuilder {
    source: String,
    elements: Vec<Element>,
    current: Option<Element>,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text that belongs to no attribute
    pub fn text(mut self, text: &str) -> Self {
        self.source.push_str(text);
        self
    }

    /// Start a new element by writing `<name`
    pub fn open(mut self, name: &str) -> Self {
        self.finish_element();
        let start = self.source.len();
        self.source.push('<');
        self.source.push_str(name);
        self.current = Some(Element {
            name: Some(name.to_string()),
            span: Span::new(start, start),
            ..Element::default()
        });
        self
    }

    /// Append a space and a plain attribute whose text starts with `name`
    pub fn attr(self, name: &str, text: &str) -> Self {
        self.push_attribute(AttributeKind::Plain, Some(name), text)
    }

    /// Append a space and a plain attribute the parser could not name
    pub fn unnamed(self, text: &str) -> Self {
        self.push_attribute(AttributeKind::Plain, None, text)
    }

    /// Append a space and a spread attribute
    pub fn spread(self, text: &str) -> Self {
        self.push_attribute(AttributeKind::Spread, None, text)
    }

    /// Write the end of the opening tag and close the element span
    pub fn close(mut self, text: &str) -> Self {
        self.source.push_str(text);
        self.finish_element();
        self
    }

    pub fn build(mut self) -> Document {
        self.finish_element();
        Document::new(self.source, self.elements)
    }

    fn push_attribute(mut self, kind: AttributeKind, name: Option<&str>, text: &str) -> Self {
        self.source.push(' ');
        let start = self.source.len();
        self.source.push_str(text);
        let attribute = Attribute {
            kind,
            name: name.map(str::to_string),
            span: Span::new(start, self.source.len()),
        };

        self.current
            .get_or_insert_with(|| Element {
                span: Span::new(start, start),
                ..Element::default()
            })
            .attributes
            .push(attribute);
        self
    }

    fn finish_element(&mut self) {
        if let Some(mut element) = self.current.take() {
            element.span.end = self.source.len();
            self.elements.push(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_match_source() {
        let doc = SourceBuilder::new()
            .open("A")
            .attr("x", "x=\"1\"")
            .attr("templateName", "templateName=\"t\"")
            .close(">")
            .build();

        let element = &doc.elements()[0];
        assert_eq!(element.span, Span::new(0, doc.source().len()));
        assert_eq!(doc.text(element.attributes[0].span), "x=\"1\"");
        assert_eq!(doc.text(element.attributes[1].span), "templateName=\"t\"");
    }

    #[test]
    fn test_multiple_elements() {
        let doc = SourceBuilder::new()
            .open("A")
            .attr("a", "a")
            .close(" />")
            .text("\n")
            .open("B")
            .unnamed("{/* c */}")
            .close(" />")
            .build();

        assert_eq!(doc.elements().len(), 2);
        assert_eq!(doc.elements()[1].attributes[0].name(), None);
        assert_eq!(doc.position(doc.elements()[1].span.start).line, 2);
    }
}
