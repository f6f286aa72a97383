// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-term field tiers.
//!
//! Each query term is credited once, at the first tier it reaches:
//!
//! ```text
//! title exact (9) → title typo (5) → slug exact (7) → slug typo (4)
//!   → description exact (4) → description typo (2) → heading typo (2)
//!   → content exact (2)
//! ```
//!
//! "Exact" means a substring of the normalized field or one of its words.

use crate::fuzzy::typo_match;
use crate::index::IndexedDoc;

use super::core::Weights;

fn field_has(field: &str, words: &[String], term: &str) -> bool {
    field.contains(term) || words.iter().any(|w| w == term)
}

/// Tier weight for a single term, zero when no tier matches.
pub fn term_score(doc: &IndexedDoc, term: &str, weights: &Weights) -> u32 {
    if field_has(&doc.title, &doc.title_words, term) {
        weights.title_term
    } else if typo_match(term, &doc.title_words) {
        weights.title_typo
    } else if field_has(&doc.slug, &doc.slug_words, term) {
        weights.slug_term
    } else if typo_match(term, &doc.slug_words) {
        weights.slug_typo
    } else if field_has(&doc.description, &doc.description_words, term) {
        weights.description_term
    } else if typo_match(term, &doc.description_words) {
        weights.description_typo
    } else if typo_match(term, &doc.heading_words) {
        weights.heading_typo
    } else if doc.content.contains(term) {
        weights.content_term
    } else {
        0
    }
}

/// Sum of [`term_score`] over all terms.
pub fn terms_score<S: AsRef<str>>(doc: &IndexedDoc, terms: &[S], weights: &Weights) -> u32 {
    terms
        .iter()
        .map(|term| term_score(doc, term.as_ref(), weights))
        .fold(0, u32::saturating_add)
}
