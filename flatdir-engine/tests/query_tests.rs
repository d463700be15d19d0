//! Filter, fulltext, and projection semantics.

use flatdir_engine::{Directory, Session};
use flatdir_model::{DirectoryConfig, FieldMap, FieldValue};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn field_map(pairs: Vec<(&str, FieldValue)>) -> FieldMap {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn fulltext(fields: &[&str]) -> HashSet<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Two entries:
/// 1 -> pw="secr",  a="AAA",    b="BCD", int=3
/// 2 -> pw="guess", a="AAA222", b="BCD"
fn seeded_session() -> Session {
    let dir = Directory::new(DirectoryConfig::new(
        "mydir",
        "i",
        Some("pw"),
        ["i", "pw", "a", "int", "b"],
    ));
    let session = dir.session();
    session
        .create_entry(field_map(vec![
            ("i", "1".into()),
            ("pw", "secr".into()),
            ("a", "AAA".into()),
            ("b", "BCD".into()),
            ("int", 3.into()),
        ]))
        .unwrap();
    session
        .create_entry(field_map(vec![
            ("i", "2".into()),
            ("pw", "guess".into()),
            ("a", "AAA222".into()),
            ("b", "BCD".into()),
        ]))
        .unwrap();
    session
}

// ── Exact-match filters ──────────────────────────────────────────

#[test]
fn empty_filter_returns_everything() {
    let session = seeded_session();
    let entries = session.query(&FieldMap::new());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[1].id, "2");
}

#[test]
fn filter_with_only_unknown_fields_matches_everything() {
    let session = seeded_session();
    let entries = session.query(&field_map(vec![("bobo", "bibi".into())]));
    assert_eq!(entries.len(), 2);
}

#[test]
fn filter_with_no_match_returns_empty() {
    let session = seeded_session();
    assert!(session.query(&field_map(vec![("a", "gaga".into())])).is_empty());
}

#[test]
fn exact_match_does_not_do_prefixes() {
    let session = seeded_session();
    assert!(session.query(&field_map(vec![("a", "A".into())])).is_empty());
}

#[test]
fn simple_exact_match() {
    let session = seeded_session();
    let entries = session.query(&field_map(vec![("a", "AAA".into())]));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[0].get_str("b"), Some("BCD"));
}

#[test]
fn unknown_filter_key_is_ignored_alongside_real_ones() {
    let session = seeded_session();
    let entries = session.query(&field_map(vec![
        ("a", "AAA".into()),
        ("bobo", "bibi".into()),
    ]));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
}

#[test]
fn multiple_criteria_are_anded() {
    let session = seeded_session();
    let entries = session.query(&field_map(vec![
        ("a", "AAA".into()),
        ("b", "BCD".into()),
    ]));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[0].get_str("pw"), Some("secr"));

    // each criterion matches one entry, but no entry matches both
    let entries = session.query(&field_map(vec![
        ("a", "AAA".into()),
        ("pw", "guess".into()),
    ]));
    assert!(entries.is_empty());
}

#[test]
fn integer_filter_matches_integer_values_only() {
    let session = seeded_session();
    let entries = session.query(&field_map(vec![("int", 3.into())]));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
    // no cross-type coercion
    assert!(session.query(&field_map(vec![("int", "3".into())])).is_empty());
}

#[test]
fn missing_field_value_never_matches_exact_filter() {
    let session = seeded_session();
    // entry 2 has no "int" value
    let entries = session.query(&field_map(vec![("int", 3.into())]));
    assert_eq!(entries.len(), 1);
}

// ── Fulltext filters ─────────────────────────────────────────────

#[test]
fn star_is_a_literal_without_fulltext() {
    let session = seeded_session();
    let entries = session.query_fulltext(&field_map(vec![("a", "*".into())]), &fulltext(&[]));
    assert!(entries.is_empty());
}

#[test]
fn fulltext_matches_prefix_only() {
    let session = seeded_session();
    // "c" is inside "BCD", not a prefix
    let entries = session.query_fulltext(&field_map(vec![("b", "c".into())]), &fulltext(&["b"]));
    assert!(entries.is_empty());
    // lowercase prefix of "BCD"
    let entries = session.query_fulltext(&field_map(vec![("b", "b".into())]), &fulltext(&["b"]));
    assert_eq!(entries.len(), 2);
}

#[test]
fn fulltext_and_exact_criteria_combine() {
    let session = seeded_session();
    let ft = fulltext(&["b"]);

    // second criterion is exact and matches nothing
    let entries =
        session.query_fulltext(&field_map(vec![("b", "b".into()), ("a", "a".into())]), &ft);
    assert!(entries.is_empty());

    // second criterion exact-matches entry 1
    let entries = session.query_fulltext(
        &field_map(vec![("b", "b".into()), ("a", "AAA".into())]),
        &ft,
    );
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");

    // same prefix pattern matches both entries once "a" is fulltext too
    let entries = session.query_fulltext(
        &field_map(vec![("b", "b".into()), ("a", "a".into())]),
        &fulltext(&["a", "b"]),
    );
    assert_eq!(entries.len(), 2);
}

#[test]
fn empty_fulltext_pattern_matches_everything() {
    let session = seeded_session();
    let entries = session.query_fulltext(&field_map(vec![("a", "".into())]), &fulltext(&["a"]));
    assert_eq!(entries.len(), 2);
}

#[test]
fn empty_fulltext_pattern_matches_absent_values_too() {
    let session = seeded_session();
    // entry 2 has no "int" value at all
    let entries = session.query_fulltext(&field_map(vec![("int", "".into())]), &fulltext(&["int"]));
    assert_eq!(entries.len(), 2);
    // a non-empty pattern skips the entry with no value
    let entries = session.query_fulltext(&field_map(vec![("int", "3".into())]), &fulltext(&["int"]));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
}

#[test]
fn fulltext_matches_integer_values_by_text_form() {
    let session = seeded_session();
    let entries = session.query_fulltext(&field_map(vec![("int", 3.into())]), &fulltext(&["int"]));
    assert_eq!(entries.len(), 1);
}

// ── Projection ───────────────────────────────────────────────────

#[test]
fn projection_with_empty_filter_covers_all_entries() {
    let session = seeded_session();
    let values = session.get_projection(&FieldMap::new(), "a");
    assert_eq!(
        values,
        vec![
            Some(FieldValue::from("AAA")),
            Some(FieldValue::from("AAA222"))
        ]
    );
}

#[test]
fn projection_follows_the_filter() {
    let session = seeded_session();
    let values = session.get_projection(&field_map(vec![("a", "AAA".into())]), "b");
    assert_eq!(values, vec![Some(FieldValue::from("BCD"))]);
}

#[test]
fn projection_ignores_unknown_filter_keys() {
    let session = seeded_session();
    let values = session.get_projection(
        &field_map(vec![("a", "AAA".into()), ("bobo", "bibi".into())]),
        "a",
    );
    assert_eq!(values, vec![Some(FieldValue::from("AAA"))]);
}

#[test]
fn projection_with_anded_criteria() {
    let session = seeded_session();
    let values = session.get_projection(
        &field_map(vec![("a", "AAA".into()), ("b", "BCD".into())]),
        "a",
    );
    assert_eq!(values, vec![Some(FieldValue::from("AAA"))]);

    let values = session.get_projection(
        &field_map(vec![("a", "AAA".into()), ("pw", "guess".into())]),
        "a",
    );
    assert!(values.is_empty());
}

#[test]
fn projection_keeps_duplicates() {
    let session = seeded_session();
    // both entries share b = "BCD"
    let values = session.get_projection(&FieldMap::new(), "b");
    assert_eq!(
        values,
        vec![Some(FieldValue::from("BCD")), Some(FieldValue::from("BCD"))]
    );
}

#[test]
fn projection_of_absent_values_yields_none() {
    let session = seeded_session();
    // entry 2 has no "int" value
    let values = session.get_projection(&FieldMap::new(), "int");
    assert_eq!(values, vec![Some(FieldValue::from(3)), None]);
}

#[test]
fn projection_of_unknown_column_is_all_none() {
    let session = seeded_session();
    let values = session.get_projection(&FieldMap::new(), "nope");
    assert_eq!(values, vec![None, None]);
}

#[test]
fn projection_with_fulltext_filter() {
    let session = seeded_session();
    let values = session.get_projection_fulltext(
        &field_map(vec![("a", "aaa2".into())]),
        &fulltext(&["a"]),
        "pw",
    );
    assert_eq!(values, vec![Some(FieldValue::from("guess"))]);
}
