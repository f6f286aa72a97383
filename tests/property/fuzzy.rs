//! Subsequence scorer against the subsequence oracle.

use crate::oracles::oracle_is_subsequence;
use docsift::fuzzy_score;
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e ]{0,20}").unwrap()
}

proptest! {
    #[test]
    fn prop_nonzero_iff_subsequence(text in text_strategy(), query in "[a-e]{1,6}") {
        let matched = fuzzy_score(&text, &query) > 0;
        prop_assert_eq!(matched, oracle_is_subsequence(&text, &query));
    }

    #[test]
    fn prop_exact_beats_everything(text in "[a-e]{1,10}", query in "[a-e]{1,10}") {
        prop_assert!(fuzzy_score(&text, &text) >= fuzzy_score(&text, &query));
    }

    #[test]
    fn prop_empty_query_scores_zero(text in text_strategy()) {
        prop_assert_eq!(fuzzy_score(&text, ""), 0);
    }

    #[test]
    fn prop_prefix_scores_at_least_scattered(text in "[a-e]{4,12}", len in 1usize..4) {
        let prefix: String = text.chars().take(len).collect();
        prop_assert!(fuzzy_score(&text, &prefix) >= 2 * len as u32 + 10);
    }
}

#[test]
fn test_contiguous_beats_scattered() {
    assert!(fuzzy_score("documentation", "doc") > fuzzy_score("documentation", "dcm"));
}
