//! Relative ordering between kinds of matches.

use crate::common::{assert_sorted_by_score, corpus_of, sample_corpus, slugs};
use docsift::{search, Corpus, Heading, LocalSearch, SearchDoc, Weights};

#[test]
fn test_exact_title_beats_prefix_title() {
    let corpus = corpus_of(&[
        ("advanced-routing", "Routing Advanced", ""),
        ("routing", "Routing", ""),
    ]);
    let results = search("routing", &corpus, None);
    assert_eq!(slugs(&results), vec!["routing", "advanced-routing"]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_title_beats_content_only() {
    let corpus = corpus_of(&[
        ("guide", "Guide", "deployment steps for production"),
        ("deployment", "Deployment", ""),
    ]);
    let results = search("deployment", &corpus, None);
    assert_eq!(slugs(&results), vec!["deployment", "guide"]);
}

#[test]
fn test_typo_in_query_still_ranks_target_first() {
    let results = search("deploymnt", &sample_corpus(), None);
    assert_eq!(results.first().map(|r| r.doc.slug.as_str()), Some("deploy"));
}

#[test]
fn test_heading_hit_beats_body_hit() {
    let corpus = Corpus::new(vec![
        SearchDoc::new("plain", "Plain", "mentions caching somewhere in the text"),
        SearchDoc::new("guide", "Guide", "").with_heading(Heading::new("caching", "Caching", 2)),
    ]);
    let results = search("caching", &corpus, None);
    assert_eq!(slugs(&results), vec!["guide", "plain"]);
    assert_eq!(results[0].anchor.as_deref(), Some("caching"));
}

#[test]
fn test_h2_outranks_h3() {
    let corpus = Corpus::new(vec![
        SearchDoc::new("a", "A", "").with_heading(Heading::new("limits", "Limits", 3)),
        SearchDoc::new("b", "B", "").with_heading(Heading::new("limits", "Limits", 2)),
    ]);
    assert_eq!(slugs(&search("limits", &corpus, None)), vec!["b", "a"]);
}

#[test]
fn test_more_matching_terms_rank_higher() {
    let corpus = corpus_of(&[
        ("one", "Notes", "cache settings"),
        ("two", "Notes", "cache invalidation settings"),
    ]);
    let results = search("cache invalidation", &corpus, None);
    assert_eq!(slugs(&results), vec!["two", "one"]);
}

#[test]
fn test_multi_term_results_sorted() {
    let results = search("install project", &sample_corpus(), None);
    assert_eq!(results[0].doc.slug, "getting-started");
    assert_sorted_by_score(&results);
}

#[test]
fn test_zeroed_weight_removes_signal() {
    let corpus = Corpus::new(vec![
        SearchDoc::new("guide", "Guide", "").with_heading(Heading::new("caching", "Caching", 2)),
    ]);
    let weights = Weights {
        heading_fuzzy: 0,
        heading_term: 0,
        h2_boost: 0,
        heading_typo: 0,
        ..Weights::default()
    };
    let results = LocalSearch::new().with_weights(weights).search("caching", &corpus, None);
    assert!(results.is_empty());
}
