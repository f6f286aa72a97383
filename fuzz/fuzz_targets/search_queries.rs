// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at local search and checks it never
//! panics and never breaks the result invariants. Emoji, combining marks,
//! null bytes and multi-kilobyte queries all have to come back cleanly.

#![no_main]

use docsift::testing::sample_corpus;
use docsift::{normalize_query, search, Corpus, MAX_QUERY_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static CORPUS: std::sync::OnceLock<Corpus> = std::sync::OnceLock::new();
    let corpus = CORPUS.get_or_init(sample_corpus);

    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: normalization never exceeds the length cap
    assert!(normalize_query(&query).chars().count() <= MAX_QUERY_LEN);

    // INVARIANT 2: search never panics and respects the limit
    let results = search(&query, corpus, Some(5));
    assert!(results.len() <= 5);

    // INVARIANT 3: ranked results are positive and sorted
    if !normalize_query(&query).is_empty() {
        for r in &results {
            assert!(r.score > 0.0, "ranked result with score {}", r.score);
        }
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
