// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-edit typo tolerance.
//!
//! Restricted Levenshtein distance ≤ 1: one substitution, insertion or
//! deletion. No transpositions ("teh" is two edits from "the"). The length
//! difference is a lower bound on edit distance, so words more than one
//! character longer or shorter are skipped without scanning.

/// Terms shorter than this never match fuzzily. Too much collides at one edit.
pub const MIN_TYPO_TERM_LEN: usize = 4;

/// Is `term` within one edit of any of `words`?
pub fn typo_match<S: AsRef<str>>(term: &str, words: &[S]) -> bool {
    let term: Vec<char> = term.chars().collect();
    if term.len() < MIN_TYPO_TERM_LEN {
        return false;
    }

    words.iter().any(|word| {
        let word: Vec<char> = word.as_ref().chars().collect();
        if word.len().abs_diff(term.len()) > 1 {
            return false;
        }
        within_one_edit(&term, &word)
    })
}

/// Two-pointer scan allowing a single mismatch (equal lengths) or a single
/// skip in the longer string (lengths differ by one).
fn within_one_edit(a: &[char], b: &[char]) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.len() == long.len() {
        return short.iter().zip(long).filter(|(x, y)| x != y).count() <= 1;
    }

    let (mut i, mut j) = (0, 0);
    let mut skipped = false;
    while i < short.len() && j < long.len() {
        if short[i] == long[j] {
            i += 1;
        } else {
            if skipped {
                return false;
            }
            skipped = true;
        }
        j += 1;
    }
    // A trailing extra character in `long` is the one allowed skip.
    true
}
