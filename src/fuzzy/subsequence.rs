// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-order subsequence scoring.
//!
//! Exact and prefix matches get flat bonuses on top of the length term.
//! Otherwise every matched query character scores `1 + run`, where `run` is
//! the number of characters matched back-to-back just before it, so "doc"
//! inside "documentation" beats "dcm" scattered through it.
//!
//! Scores grow quadratically with run length, so every step saturates at
//! `u32::MAX` instead of overflowing.

/// Flat bonus when the text equals the query.
pub const EXACT_BONUS: u32 = 30;

/// Flat bonus when the text starts with the query.
pub const PREFIX_BONUS: u32 = 10;

/// Score how well `query` appears in order inside `text`. Zero means no match.
///
/// Both inputs are expected to be normalized already. Lengths are in
/// characters.
pub fn fuzzy_score(text: &str, query: &str) -> u32 {
    let query_len = query.chars().count() as u32;
    if query_len == 0 || query_len as usize > text.chars().count() {
        return 0;
    }
    if text == query {
        return query_len.saturating_mul(2).saturating_add(EXACT_BONUS);
    }
    if text.starts_with(query) {
        return query_len.saturating_mul(2).saturating_add(PREFIX_BONUS);
    }

    let mut pending = query.chars().peekable();
    let mut score: u32 = 0;
    let mut run: u32 = 0;
    for c in text.chars() {
        let Some(&wanted) = pending.peek() else {
            break;
        };
        if c == wanted {
            score = score.saturating_add(run.saturating_add(1));
            run = run.saturating_add(1);
            pending.next();
        } else {
            run = 0;
        }
    }

    if pending.peek().is_some() {
        0
    } else {
        score
    }
}
