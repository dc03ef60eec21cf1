//! Applying fixes to source text

use crate::linter::{Fix, LintError};
use std::fs;
use std::path::Path;

/// Outcome of fixing one file
#[derive(Debug)]
pub struct FixOutcome<'a> {
    /// Number of fixes written to the file
    pub applied: usize,
    /// Errors still present after fixing, in source order
    ///
    /// These are the errors without a fix and the errors whose fix was
    /// skipped because it overlapped a fix that was applied.
    pub remaining: Vec<&'a LintError>,
}

/// Apply range fixes to content
///
/// Fixes are applied in source order against the original text. A fix that
/// overlaps one already accepted is skipped; this happens when an element
/// nested in an attribute value and its parent are both reordered, and the
/// skipped fix is found again on the next run.
///
/// Returns the new content and the number of fixes applied.
pub fn apply_fixes_to_content(content: &str, fixes: &[&Fix]) -> (String, usize) {
    let (output, applied) = apply_each(content, fixes);
    (output, applied.iter().filter(|&&done| done).count())
}

/// Apply fixes and record, for each input fix, whether it made it in
fn apply_each(content: &str, fixes: &[&Fix]) -> (String, Vec<bool>) {
    let mut order: Vec<usize> = (0..fixes.len()).collect();
    order.sort_by_key(|&i| (fixes[i].start_offset, fixes[i].end_offset));

    let mut output = String::with_capacity(content.len());
    let mut applied = vec![false; fixes.len()];
    let mut cursor = 0;
    let mut last: Option<&Fix> = None;

    for i in order {
        let fix = fixes[i];
        if last.is_some_and(|prev| prev.overlaps(fix)) {
            log::debug!(
                "skipping fix at {}..{}: overlaps a previous fix",
                fix.start_offset,
                fix.end_offset
            );
            continue;
        }
        let in_bounds = content.get(fix.start_offset..fix.end_offset).is_some();
        let Some(before) = content
            .get(cursor..fix.start_offset)
            .filter(|_| in_bounds)
        else {
            log::debug!(
                "skipping fix at {}..{}: outside of content",
                fix.start_offset,
                fix.end_offset
            );
            continue;
        };

        output.push_str(before);
        output.push_str(&fix.new_text);
        cursor = fix.end_offset;
        last = Some(fix);
        applied[i] = true;
    }

    output.push_str(&content[cursor..]);
    (output, applied)
}

/// Apply the fixes of `errors` to a file
///
/// The file is only rewritten when at least one fix was applied.
pub fn apply_fixes<'a>(path: &Path, errors: &'a [LintError]) -> std::io::Result<FixOutcome<'a>> {
    let content = fs::read_to_string(path)?;
    let (fixable, mut remaining): (Vec<&LintError>, Vec<&LintError>) =
        errors.iter().partition(|e| e.fix.is_some());
    let fixes: Vec<&Fix> = fixable.iter().filter_map(|e| e.fix.as_ref()).collect();

    let (fixed, applied) = apply_each(&content, &fixes);
    let applied_count = applied.iter().filter(|&&done| done).count();
    if applied_count > 0 {
        fs::write(path, fixed)?;
    }

    remaining.extend(
        fixable
            .into_iter()
            .zip(applied)
            .filter(|(_, done)| !done)
            .map(|(error, _)| error),
    );
    remaining.sort_by_key(|e| e.offset);

    Ok(FixOutcome {
        applied: applied_count,
        remaining,
    })
}
