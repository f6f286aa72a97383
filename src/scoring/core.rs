// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weight table and the per-document aggregate.
//!
//! # Default weights
//!
//! | Signal                              | Weight |
//! |-------------------------------------|--------|
//! | fuzzy title                         | ×3     |
//! | fuzzy description                   | ×1     |
//! | term in title / typo in title       | 9 / 5  |
//! | term in slug / typo in slug         | 7 / 4  |
//! | term in description / typo          | 4 / 2  |
//! | typo in heading words               | 2      |
//! | term in content                     | 2      |
//! | title or slug equals query          | +30    |
//! | heading: fuzzy ×2, +3 per term, h2 +8, h3 +5, other +3 |
//! | content hit: 5 + 1 per term present |        |
//!
//! Only the field tiers are mutually exclusive (first tier that matches a
//! term wins). Every other signal adds.

use crate::fuzzy::fuzzy_score;
use crate::index::IndexedDoc;
use crate::query::ParsedQuery;

use super::matchers::{best_heading, content_match};
use super::terms::terms_score;

/// Tunable ranking constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    pub title_fuzzy: u32,
    pub description_fuzzy: u32,

    pub title_term: u32,
    pub title_typo: u32,
    pub slug_term: u32,
    pub slug_typo: u32,
    pub description_term: u32,
    pub description_typo: u32,
    pub heading_typo: u32,
    pub content_term: u32,

    /// Added when the title or slug equals the whole normalized query.
    pub exact_match_bonus: u32,

    pub heading_fuzzy: u32,
    pub heading_term: u32,
    pub h2_boost: u32,
    pub h3_boost: u32,
    pub other_heading_boost: u32,

    pub content_base: u32,
    pub content_per_term: u32,

    /// Snippet window, in characters before and after the match start.
    pub snippet_before: usize,
    pub snippet_after: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title_fuzzy: 3,
            description_fuzzy: 1,
            title_term: 9,
            title_typo: 5,
            slug_term: 7,
            slug_typo: 4,
            description_term: 4,
            description_typo: 2,
            heading_typo: 2,
            content_term: 2,
            exact_match_bonus: 30,
            heading_fuzzy: 2,
            heading_term: 3,
            h2_boost: 8,
            h3_boost: 5,
            other_heading_boost: 3,
            content_base: 5,
            content_per_term: 1,
            snippet_before: 40,
            snippet_after: 60,
        }
    }
}

impl Weights {
    pub fn level_boost(&self, level: u8) -> u32 {
        match level {
            2 => self.h2_boost,
            3 => self.h3_boost,
            _ => self.other_heading_boost,
        }
    }
}

/// The outcome of scoring one document against one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocScore {
    pub score: u32,
    pub snippet: Option<String>,
    pub anchor: Option<String>,
    pub heading: Option<String>,
}

/// Score one document. `None` when nothing matched.
///
/// The query must be non-empty; empty queries are a listing, not a search.
pub fn score_doc(doc: &IndexedDoc, query: &ParsedQuery, weights: &Weights) -> Option<DocScore> {
    let mut score = fuzzy_score(&doc.title, &query.text)
        .saturating_mul(weights.title_fuzzy)
        .saturating_add(fuzzy_score(&doc.description, &query.text).saturating_mul(weights.description_fuzzy))
        .saturating_add(terms_score(doc, &query.terms, weights));

    if doc.title == query.text || doc.slug == query.text {
        score = score.saturating_add(weights.exact_match_bonus);
    }

    let heading = best_heading(doc, query, weights);
    let content = content_match(doc, query, weights);

    if let Some(h) = &heading {
        score = score.saturating_add(h.score);
    }
    if let Some(c) = &content {
        score = score.saturating_add(c.score);
    }

    if score == 0 {
        return None;
    }

    let (snippet, anchor, heading_text) = match (heading, content) {
        (Some(h), _) => (Some(h.text.clone()), Some(h.id), Some(h.text)),
        (None, Some(c)) => (Some(c.snippet), None, None),
        (None, None) => (None, None, None),
    };

    Some(DocScore {
        score,
        snippet,
        anchor,
        heading: heading_text,
    })
}
