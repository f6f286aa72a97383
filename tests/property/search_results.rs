//! End-to-end invariants of local search on random corpora.

use crate::common::assert_sorted_by_score;
use docsift::{search, Corpus, SearchDoc};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    prop::collection::vec((word_strategy(), text_strategy(), text_strategy()), 0..12).prop_map(|docs| {
        Corpus::new(
            docs.into_iter()
                .enumerate()
                .map(|(i, (title, description, content))| {
                    SearchDoc::new(format!("page-{i}"), title, content).with_description(description)
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn prop_results_bounded_sorted_positive(
        corpus in corpus_strategy(),
        query in "[a-z]{1,6}( [a-z]{1,6})?",
        limit in 0usize..8,
    ) {
        let results = search(&query, &corpus, Some(limit));
        prop_assert!(results.len() <= limit);
        prop_assert!(results.iter().all(|r| r.score > 0.0));
        assert_sorted_by_score(&results);
    }

    #[test]
    fn prop_limit_is_prefix_of_full_ranking(
        corpus in corpus_strategy(),
        query in "[a-z]{1,4}",
        limit in 0usize..8,
    ) {
        let all = search(&query, &corpus, None);
        let top = search(&query, &corpus, Some(limit));
        prop_assert_eq!(top, all[..limit.min(all.len())].to_vec());
    }

    #[test]
    fn prop_empty_query_lists_prefix(corpus in corpus_strategy(), limit in 0usize..20) {
        let results = search("", &corpus, Some(limit));
        prop_assert_eq!(results.len(), corpus.len().min(limit));
        for (result, doc) in results.iter().zip(corpus.docs()) {
            prop_assert_eq!(&result.doc, doc);
            prop_assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn prop_title_query_finds_doc(corpus in corpus_strategy()) {
        for doc in corpus.docs() {
            let results = search(&doc.title, &corpus, None);
            prop_assert!(results.iter().any(|r| r.doc.slug == doc.slug));
        }
    }
}
