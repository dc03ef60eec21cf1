//! Turning reordered runs into a single text replacement

use crate::linter::Fix;
use crate::tree::{Attribute, Document, Span};

/// Replacement of one attribute's span with another attribute's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edit<'a> {
    pub span: Span,
    pub text: &'a str,
}

/// Build one edit per position of every run whose order changed
///
/// Positions that keep their attribute still get an edit (a no-op), which
/// keeps the merged span covering the whole run.
pub(crate) fn collect_edits<'a>(
    document: &'a Document,
    groups: &[Vec<&Attribute>],
    sorted_groups: &[Vec<&Attribute>],
) -> Vec<Edit<'a>> {
    groups
        .iter()
        .zip(sorted_groups)
        .filter(|(group, sorted)| !same_order(group, sorted))
        .flat_map(|(group, sorted)| {
            group.iter().zip(sorted).map(|(original, moved)| Edit {
                span: original.span,
                text: document.text(moved.span),
            })
        })
        .collect()
}

fn same_order(a: &[&Attribute], b: &[&Attribute]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
}

/// Merge non-overlapping edits into one fix
///
/// The fix spans from the first edit's start to the last edit's end. Its
/// text is the original source of that span with every edit applied; the
/// source itself is never modified. Returns `None` when there is nothing to
/// merge or the edits overlap.
pub(crate) fn merge_edits(source: &str, mut edits: Vec<Edit<'_>>) -> Option<Fix> {
    edits.sort_by_key(|edit| edit.span.start);

    let range_start = edits.first()?.span.start;
    let range_end = edits.iter().map(|edit| edit.span.end).max()?;

    let mut text = String::with_capacity(range_end - range_start);
    let mut cursor = range_start;
    for edit in &edits {
        // Overlapping edits make the slice inverted and abort the fix
        text.push_str(source.get(cursor..edit.span.start)?);
        text.push_str(edit.text);
        cursor = edit.span.end;
    }

    Some(Fix::replace_range(range_start, range_end, &text))
}
