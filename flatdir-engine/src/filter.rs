//! Predicate evaluation for queries.

use flatdir_model::{Entry, FieldMap, FieldValue};
use std::collections::HashSet;

/// Evaluates `filter` against one entry.
///
/// Every supplied pair must hold (logical AND). Pairs whose field is not
/// part of `schema` are ignored, so callers may pass speculative filter
/// keys safely; an empty filter matches everything.
///
/// Fields listed in `fulltext` match by case-insensitive prefix on the
/// value's text form, and an empty pattern matches any entry, including
/// one with no value under that field. All other fields require strict
/// value equality: case-sensitive for strings, exact for integers, and
/// never across types. `*` has no special meaning — outside a fulltext
/// field it only matches a literal `*` value.
#[must_use]
pub fn matches(
    entry: &Entry,
    filter: &FieldMap,
    fulltext: &HashSet<String>,
    schema: &HashSet<String>,
) -> bool {
    filter.iter().all(|(field, expected)| {
        if !schema.contains(field) {
            return true;
        }
        let stored = entry.get(field);
        if fulltext.contains(field) {
            prefix_match(stored, expected)
        } else {
            stored == Some(expected)
        }
    })
}

/// Case-insensitive prefix test on text forms. An absent stored value
/// matches only the empty pattern.
fn prefix_match(stored: Option<&FieldValue>, expected: &FieldValue) -> bool {
    let pattern = expected.to_string().to_lowercase();
    match stored {
        Some(value) => value.to_string().to_lowercase().starts_with(&pattern),
        None => pattern.is_empty(),
    }
}
