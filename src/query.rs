// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization and word splitting.
//!
//! Every string that gets compared goes through [`fold_lowercase`], which maps
//! each character to exactly one lowercase character. That keeps character
//! offsets in the lowercased content aligned with the original-case content,
//! which the snippet extractor relies on.

/// Queries longer than this (in characters) are truncated.
pub const MAX_QUERY_LEN: usize = 200;

/// Length clamp applied to incoming queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    pub max_len: usize,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            max_len: MAX_QUERY_LEN,
        }
    }
}

impl QueryPolicy {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Lowercase, collapse whitespace, trim, then truncate.
    pub fn normalize(&self, query: &str) -> String {
        let collapsed = normalize_text(query);
        truncate_chars(&collapsed, self.max_len).to_string()
    }

    /// Truncate only. Case and spacing are preserved.
    pub fn trim<'a>(&self, query: &'a str) -> &'a str {
        truncate_chars(query, self.max_len)
    }
}

/// A normalized query and its terms, computed once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub text: String,
    pub terms: Vec<String>,
}

impl ParsedQuery {
    pub fn new(raw: &str, policy: &QueryPolicy) -> Self {
        let text = policy.normalize(raw);
        let terms = query_terms(&text).into_iter().map(str::to_string).collect();
        Self { text, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// [`QueryPolicy::normalize`] with the default length limit.
pub fn normalize_query(query: &str) -> String {
    QueryPolicy::default().normalize(query)
}

/// [`QueryPolicy::trim`] with the default length limit.
pub fn trim_query(query: &str) -> &str {
    QueryPolicy::default().trim(query)
}

/// Lowercase one character to one character.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase a string without changing its character count.
pub fn fold_lowercase(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Lowercase and collapse whitespace runs into single spaces, trimmed.
pub fn normalize_text(text: &str) -> String {
    fold_lowercase(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-delimited terms of an already normalized query.
pub fn query_terms(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Split normalized text on runs of anything outside `[a-z0-9]`.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prefix of at most `max` characters, cut on a character boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
