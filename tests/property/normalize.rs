//! Query normalization invariants.

use docsift::{normalize_query, trim_query, MAX_QUERY_LEN};
use proptest::prelude::*;

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-zÀ-ÖØ-öø-ÿ0-9 \t\n]{0,60}").unwrap()
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(query in query_strategy()) {
        let once = normalize_query(&query);
        prop_assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn prop_normalized_has_no_stray_whitespace(query in query_strategy()) {
        let normalized = normalize_query(&query);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.contains('\t'));
        prop_assert!(!normalized.contains('\n'));
    }

    #[test]
    fn prop_normalized_is_lowercase(query in query_strategy()) {
        let normalized = normalize_query(&query);
        prop_assert!(normalized.chars().all(|c| !c.is_uppercase()));
    }

    #[test]
    fn prop_length_is_capped(query in "\\PC{0,400}") {
        prop_assert!(normalize_query(&query).chars().count() <= MAX_QUERY_LEN);
        let trimmed = trim_query(&query);
        prop_assert!(trimmed.chars().count() <= MAX_QUERY_LEN);
        prop_assert!(query.starts_with(trimmed));
    }
}

#[test]
fn test_canonical_example() {
    assert_eq!(normalize_query("  Foo   Bar  "), "foo bar");
}
