// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The documents going in and the results coming out.
//!
//! A [`SearchDoc`] is one page of documentation as handed over by the content
//! loader: markup already stripped, headings already extracted. A
//! [`SearchResult`] is what every backend (local engine, remote client,
//! third-party provider) hands back, so UI and tool layers never care which
//! backend produced it.
//!
//! [`DocMeta`] is the lightweight view (no content, no headings) used by
//! remote hits and listings. Going between the two is always an explicit
//! conversion.

use serde::{Deserialize, Serialize};

/// A section heading inside a page. `id` is the anchor target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub id: String,
    pub text: String,
    /// 2 or 3 in practice. Other levels are accepted and get the smallest boost.
    pub level: u8,
}

impl Heading {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }
}

/// One searchable page.
///
/// `slug` is expected to be unique within a corpus, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDoc {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<Heading>,
}

impl SearchDoc {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
            content: content.into(),
            headings: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.headings.push(heading);
        self
    }
}

/// Page metadata without the searchable body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&SearchDoc> for DocMeta {
    fn from(doc: &SearchDoc) -> Self {
        Self {
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
        }
    }
}

/// A metadata-only page becomes a doc with empty content and no headings.
impl From<DocMeta> for SearchDoc {
    fn from(meta: DocMeta) -> Self {
        Self {
            slug: meta.slug,
            title: meta.title,
            description: meta.description,
            content: String::new(),
            headings: Vec::new(),
        }
    }
}

/// A ranked hit.
///
/// `score > 0` for every ranked result. The only zero-score results come from
/// the empty-query listing, which is not ranked at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc: SearchDoc,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Heading id to jump to, when the best match was a heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Heading text, paired with `anchor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl SearchResult {
    /// Listing entry: no ranking, no snippet.
    pub fn unranked(doc: SearchDoc) -> Self {
        Self {
            doc,
            score: 0.0,
            snippet: None,
            anchor: None,
            heading: None,
        }
    }

    /// Link target: `slug` or `slug#anchor`.
    pub fn href(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("{}#{}", self.doc.slug, anchor),
            None => self.doc.slug.clone(),
        }
    }
}
