//! Same corpus and query, same answer, regardless of how we get there.

use std::sync::Arc;
use std::thread;

use crate::common::{make_doc, sample_corpus, slugs};
use docsift::{search, Corpus, SearchDoc};

#[test]
fn test_repeated_search_is_identical() {
    let corpus = sample_corpus();
    for query in ["install", "oauth", "conf", "deploymnt", ""] {
        assert_eq!(search(query, &corpus, Some(3)), search(query, &corpus, Some(3)));
    }
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let docs: Vec<SearchDoc> = (0..6).map(|i| make_doc(i, "Widget", "widget body")).collect();
    let corpus = Corpus::new(docs);

    let all = search("widget", &corpus, None);
    assert_eq!(slugs(&all), vec!["doc-0", "doc-1", "doc-2", "doc-3", "doc-4", "doc-5"]);

    let top = search("widget", &corpus, Some(2));
    assert_eq!(slugs(&top), vec!["doc-0", "doc-1"]);
}

#[test]
fn test_limit_is_a_prefix_of_unbounded() {
    let corpus = sample_corpus();
    for query in ["install", "config", "the", "o"] {
        let all = search(query, &corpus, None);
        for limit in 0..=all.len() {
            assert_eq!(search(query, &corpus, Some(limit)), all[..limit].to_vec(), "{query} @ {limit}");
        }
    }
}

#[test]
fn test_clone_shares_results() {
    let corpus = sample_corpus();
    let before = search("oauth", &corpus, None);
    let cloned = corpus.clone();
    assert!(cloned.is_indexed());
    assert_eq!(search("oauth", &cloned, None), before);
}

#[test]
fn test_concurrent_searches_agree() {
    let corpus = Arc::new(sample_corpus());
    let expected = search("install", &corpus, None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || search("install", &corpus, None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_large_corpus_matches_small_corpus_ranking() {
    // Big enough to take the parallel indexing path when it's enabled.
    let docs: Vec<SearchDoc> = (0..400)
        .map(|i| make_doc(i, &format!("Page {i}"), if i % 7 == 0 { "cache tuning" } else { "other" }))
        .collect();
    let corpus = Corpus::new(docs.clone());
    let results = search("cache", &corpus, None);
    assert_eq!(results.len(), docs.iter().filter(|d| d.content.contains("cache")).count());
    assert_eq!(results[0].doc.slug, "doc-0");

    let index = corpus.index();
    assert_eq!(index.len(), 400);
    assert_eq!(index[7].content, "cache tuning");
}
