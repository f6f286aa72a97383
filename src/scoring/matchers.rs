// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading and content matchers, and snippet extraction.

use crate::fuzzy::fuzzy_score;
use crate::index::IndexedDoc;
use crate::query::ParsedQuery;

use super::core::Weights;

/// The best-scoring heading of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    pub score: u32,
    pub id: String,
    pub text: String,
}

/// The earliest query or term hit in the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMatch {
    pub score: u32,
    /// Character offset of the hit.
    pub offset: usize,
    pub snippet: String,
}

/// Pick the highest-scoring heading. Earlier headings win ties.
///
/// A heading needs a textual signal (a fuzzy hit on the whole query, or at
/// least one term contained) before its level boost counts; otherwise every
/// document with headings would match every query.
pub fn best_heading(doc: &IndexedDoc, query: &ParsedQuery, weights: &Weights) -> Option<HeadingMatch> {
    let mut best: Option<HeadingMatch> = None;

    for heading in &doc.headings {
        let fuzzy = fuzzy_score(&heading.normalized, &query.text);
        let contained = query
            .terms
            .iter()
            .filter(|term| heading.normalized.contains(term.as_str()))
            .count() as u32;
        if fuzzy == 0 && contained == 0 {
            continue;
        }

        let score = fuzzy
            .saturating_mul(weights.heading_fuzzy)
            .saturating_add(contained.saturating_mul(weights.heading_term))
            .saturating_add(weights.level_boost(heading.level));

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(HeadingMatch {
                score,
                id: heading.id.clone(),
                text: heading.text.clone(),
            });
        }
    }

    best
}

/// Find the earliest occurrence of the query or any term in the content.
pub fn content_match(doc: &IndexedDoc, query: &ParsedQuery, weights: &Weights) -> Option<ContentMatch> {
    let first_byte = std::iter::once(query.text.as_str())
        .chain(query.terms.iter().map(String::as_str))
        .filter_map(|needle| doc.content.find(needle))
        .min()?;

    let present = query
        .terms
        .iter()
        .filter(|term| doc.content.contains(term.as_str()))
        .count() as u32;

    // `content` and `content_raw` have equal character counts.
    let offset = doc.content[..first_byte].chars().count();
    let snippet = snippet_around(
        &doc.content_raw,
        offset,
        weights.snippet_before,
        weights.snippet_after,
    );

    Some(ContentMatch {
        score: weights
            .content_base
            .saturating_add(present.saturating_mul(weights.content_per_term)),
        offset,
        snippet,
    })
}

/// Cut `[offset - before, offset + after)` characters out of `text`, marking
/// truncated edges with `...`.
pub fn snippet_around(text: &str, offset: usize, before: usize, after: usize) -> String {
    let total = text.chars().count();
    let start = offset.saturating_sub(before);
    let end = offset.saturating_add(after).min(total);

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(char_slice(text, start, end));
    if end < total {
        snippet.push_str("...");
    }
    snippet
}

/// Slice by character positions. Out-of-range positions clamp to the end.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |pos: usize| text.char_indices().nth(pos).map_or(text.len(), |(b, _)| b);
    let (from, to) = (byte_at(start), byte_at(end));
    if from >= to {
        ""
    } else {
        &text[from..to]
    }
}
