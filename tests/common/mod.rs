//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{Corpus, SearchDoc, SearchResult};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_doc, make_doc_simple, make_doc_with_headings, sample_corpus};

/// Corpus from `(slug, title, content)` triples.
pub fn corpus_of(docs: &[(&str, &str, &str)]) -> Corpus {
    Corpus::new(
        docs.iter()
            .map(|(slug, title, content)| SearchDoc::new(*slug, *title, *content))
            .collect(),
    )
}

pub fn slugs(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.doc.slug.as_str()).collect()
}

/// Scores must never increase down the list.
pub fn assert_sorted_by_score(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].doc.slug,
            pair[0].score,
            pair[1].doc.slug,
            pair[1].score
        );
    }
}
