//! Single-edit matcher against a full edit-distance oracle.

use crate::oracles::oracle_levenshtein;
use docsift::fuzzy::MIN_TYPO_TERM_LEN;
use docsift::typo_match;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_matches_levenshtein_oracle(term in "[a-c]{0,7}", word in "[a-c]{0,7}") {
        let expected = term.chars().count() >= MIN_TYPO_TERM_LEN && oracle_levenshtein(&term, &word) <= 1;
        prop_assert_eq!(typo_match(&term, &[word.as_str()]), expected);
    }

    #[test]
    fn prop_any_word_suffices(term in "[a-c]{4,7}", words in prop::collection::vec("[a-c]{0,7}", 0..5)) {
        let expected = words.iter().any(|w| oracle_levenshtein(&term, w) <= 1);
        prop_assert_eq!(typo_match(&term, &words), expected);
    }
}

#[test]
fn test_documented_examples() {
    assert!(typo_match("docz", &["docs"]));
    assert!(!typo_match("doc", &["docs"]));
    assert!(!typo_match("teh", &["the"]));
}
