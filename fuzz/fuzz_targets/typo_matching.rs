// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for single-edit typo matching.
//!
//! Differential check against a plain Wagner-Fischer edit distance.

#![no_main]

use arbitrary::Arbitrary;
use docsift::fuzzy::MIN_TYPO_TERM_LEN;
use docsift::typo_match;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    term: String,
    word: String,
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + usize::from(ca != cb));
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fuzz_target!(|input: Input| {
    if input.term.len() > 64 || input.word.len() > 64 {
        return;
    }
    let expected = input.term.chars().count() >= MIN_TYPO_TERM_LEN && levenshtein(&input.term, &input.word) <= 1;
    assert_eq!(typo_match(&input.term, &[input.word.as_str()]), expected, "{input:?}");
});
