//! What local search returns, independent of ordering details.

use crate::common::{assert_sorted_by_score, corpus_of, make_doc, sample_corpus, slugs};
use docsift::{search, Corpus, LocalSearch, QueryPolicy, SearchConfig, SearchDoc};

#[test]
fn test_oauth_finds_only_auth() {
    let corpus = corpus_of(&[
        ("auth", "Authentication", "Configure OAuth providers for SSO."),
        ("intro", "Introduction", "Welcome."),
    ]);
    let results = search("oauth", &corpus, Some(10));
    assert_eq!(slugs(&results), vec!["auth"]);
    assert!(results[0].score > 0.0);
    assert!(results[0].snippet.as_deref().unwrap().contains("OAuth"));
}

#[test]
fn test_empty_query_lists_in_corpus_order() {
    let corpus = sample_corpus();
    let results = search("", &corpus, Some(3));
    assert_eq!(slugs(&results), vec!["getting-started", "auth", "config"]);
    assert!(results.iter().all(|r| r.score == 0.0 && r.snippet.is_none()));

    let all = search("  \t ", &corpus, None);
    assert_eq!(all.len(), corpus.len());
}

#[test]
fn test_ranked_scores_are_positive() {
    let corpus = sample_corpus();
    for query in ["install", "config", "oauth", "deploy", "theme", "project", "xyzzy"] {
        let results = search(query, &corpus, None);
        assert!(results.iter().all(|r| r.score > 0.0), "zero score for {query}");
        assert_sorted_by_score(&results);
    }
}

#[test]
fn test_limit_bounds_results() {
    let docs: Vec<SearchDoc> = (0..30).map(|i| make_doc(i, &format!("Widget {i}"), "widgets")).collect();
    let corpus = Corpus::new(docs);
    assert_eq!(search("widget", &corpus, Some(7)).len(), 7);
    assert_eq!(search("widget", &corpus, None).len(), 30);
    assert!(search("widget", &corpus, Some(0)).is_empty());
}

#[test]
fn test_query_is_normalized() {
    let corpus = sample_corpus();
    assert_eq!(search("  OAuth   ", &corpus, None), search("oauth", &corpus, None));
}

#[test]
fn test_overlong_query_is_truncated() {
    let corpus = sample_corpus();
    let long = "install ".repeat(100);
    let engine = LocalSearch::new();
    // Truncation happens before scoring, so this must simply not blow up.
    let _ = engine.search(&long, &corpus, Some(5));

    let tiny = LocalSearch::new().with_policy(QueryPolicy::new(4));
    let truncated = tiny.search("instXXXXXXXX", &corpus, None);
    assert_eq!(truncated, tiny.search("inst", &corpus, None));
}

#[test]
fn test_huge_configured_query_saturates_score() {
    let config = SearchConfig {
        max_query_len: 100_000,
        ..SearchConfig::default()
    };
    config.validate().unwrap();

    let query = "a".repeat(70_000);
    let corpus = Corpus::new(vec![
        SearchDoc::new("long", format!("b{query}"), ""),
        SearchDoc::new("other", "Other", ""),
    ]);
    let engine = LocalSearch::new().with_policy(config.query_policy());
    let results = engine.search(&query, &corpus, None);
    assert_eq!(slugs(&results), vec!["long"]);
    assert_eq!(results[0].score, f64::from(u32::MAX));
}

#[test]
fn test_heading_match_sets_anchor() {
    let results = search("theme", &sample_corpus(), None);
    assert_eq!(slugs(&results), vec!["config"]);
    assert_eq!(results[0].anchor.as_deref(), Some("theme"));
    assert_eq!(results[0].heading.as_deref(), Some("Theme"));
    assert_eq!(results[0].href(), "config#theme");
}

#[test]
fn test_description_only_match() {
    let corpus = Corpus::new(vec![
        SearchDoc::new("vault", "Vault", "").with_description("Manage secrets"),
        SearchDoc::new("other", "Other", "nothing here"),
    ]);
    assert_eq!(slugs(&search("secrets", &corpus, None)), vec!["vault"]);
}

#[test]
fn test_snippet_window_is_truncated_on_both_sides() {
    let content = format!("{}needle here{}", "lorem ".repeat(20), " ipsum".repeat(20));
    let corpus = Corpus::new(vec![make_doc(1, "Doc", &content)]);
    let results = search("needle", &corpus, None);
    let snippet = results[0].snippet.as_deref().unwrap();

    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));
    assert!(snippet.contains("needle"));
    // 40 characters before the hit, 60 from it, plus both markers
    assert_eq!(snippet.chars().count(), 100 + 6);
}

#[test]
fn test_snippet_offsets_count_characters() {
    let content = "Ünïcödé text with the wörd needle inside";
    let corpus = Corpus::new(vec![make_doc(1, "Doc", content)]);
    let results = search("needle", &corpus, None);
    assert_eq!(results[0].snippet.as_deref(), Some(content));
}

#[test]
fn test_mutation_is_visible_to_next_search() {
    let mut corpus = sample_corpus();
    assert!(search("kubernetes", &corpus, None).is_empty());

    corpus.push(SearchDoc::new("k8s", "Kubernetes", "Run on a cluster."));
    assert_eq!(slugs(&search("kubernetes", &corpus, None)), vec!["k8s"]);

    corpus.update(|docs| docs.retain(|d| d.slug != "k8s"));
    assert!(search("kubernetes", &corpus, None).is_empty());
}
