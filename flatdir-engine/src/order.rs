//! Stable multi-key ordering of query results.

use flatdir_model::{Entry, FieldValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-key sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// An ordering specification: `(field, direction)` pairs applied in
/// sequence, the first pair being the most significant key.
pub type OrderBy = Vec<(String, SortDirection)>;

/// Sorts `entries` in place by the given keys.
///
/// An empty `order_by` leaves the input untouched (creation order). The
/// sort is stable: when every key compares equal, relative input order is
/// preserved. `Desc` inverts the per-field comparison only — ties still
/// fall through to the next key, never to reversed stability.
pub fn sort_entries(entries: &mut [Entry], order_by: &[(String, SortDirection)]) {
    if order_by.is_empty() {
        return;
    }
    entries.sort_by(|a, b| {
        for (field, direction) in order_by {
            let ordering = compare_values(a.get(field), b.get(field));
            let ordering = match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// Type-aware comparison of two optional field values.
///
/// Numeric when both sides have a numeric interpretation (integer values,
/// or strings that parse as integers), code-point string comparison
/// otherwise. An absent value sorts before any present one.
fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_beat_lexicographic_order() {
        let two = FieldValue::from(2);
        let ten = FieldValue::from(10);
        assert_eq!(compare_values(Some(&two), Some(&ten)), Ordering::Less);
    }

    #[test]
    fn numeric_strings_compare_numerically() {
        let two = FieldValue::from("2");
        let ten = FieldValue::from("10");
        assert_eq!(compare_values(Some(&two), Some(&ten)), Ordering::Less);
    }

    #[test]
    fn mixed_types_fall_back_to_text() {
        let n = FieldValue::from(2);
        let s = FieldValue::from("BCD");
        assert_eq!(compare_values(Some(&n), Some(&s)), Ordering::Less);
    }

    #[test]
    fn absent_sorts_smallest() {
        let v = FieldValue::from("AAA");
        assert_eq!(compare_values(None, Some(&v)), Ordering::Less);
        assert_eq!(compare_values(Some(&v), None), Ordering::Greater);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }
}
