// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Arbitrary documents against arbitrary queries: scoring must not panic
//! (snippet slicing on multibyte text is the usual suspect), must be
//! deterministic, and the bounded top-K must agree with the full ranking.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{search, Corpus, Heading, SearchDoc};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzDoc {
    title: String,
    description: Option<String>,
    content: String,
    headings: Vec<(String, u8)>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    docs: Vec<FuzzDoc>,
    query: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let docs: Vec<SearchDoc> = input
        .docs
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, d)| {
            let mut doc = SearchDoc::new(format!("doc-{i}"), d.title, d.content);
            doc.description = d.description;
            for (h, (text, level)) in d.headings.into_iter().take(8).enumerate() {
                doc = doc.with_heading(Heading::new(format!("h{h}"), text, level));
            }
            doc
        })
        .collect();
    let corpus = Corpus::new(docs);
    let limit = usize::from(input.limit % 16);

    let all = search(&input.query, &corpus, None);
    let top = search(&input.query, &corpus, Some(limit));

    // Deterministic
    assert_eq!(all, search(&input.query, &corpus, None));

    // Bounded top-K is a prefix of the full ranking
    assert_eq!(top, all[..limit.min(all.len())].to_vec());

    for r in &all {
        assert!(r.score.is_finite());
        assert!(r.score >= 0.0);
    }
});
