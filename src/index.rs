// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document precomputation and the corpus that caches it.
//!
//! Scoring compares lowercase strings and word lists on every keystroke, so
//! those are derived once per corpus and kept next to the documents. The
//! cache is tied to a generation counter rather than to anything like object
//! identity: every mutation of a [`Corpus`] goes through `&mut self`, bumps
//! the generation and drops the cached index. Rebuilding is O(total corpus
//! size).
//!
//! # Invariants
//!
//! - `index().len() == docs().len()`, and `index()[i]` describes `docs()[i]`.
//! - `content` and `content_raw` have the same number of characters, so a
//!   character offset found in one is valid in the other.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::query::{fold_lowercase, normalize_text, tokenize};
use crate::types::{SearchDoc, SearchResult};

/// Corpora at least this large are indexed in parallel (with `parallel`).
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 256;

/// A heading with its normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedHeading {
    pub id: String,
    pub text: String,
    pub level: u8,
    pub normalized: String,
}

/// Everything the scorer needs from one document, precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDoc {
    pub title: String,
    pub description: String,
    pub slug: String,
    /// Lowercased, same character count as `content_raw`.
    pub content: String,
    /// Original case, for snippets.
    pub content_raw: String,
    pub headings: Vec<IndexedHeading>,
    pub title_words: Vec<String>,
    pub description_words: Vec<String>,
    pub slug_words: Vec<String>,
    pub heading_words: Vec<String>,
}

impl IndexedDoc {
    pub fn from_doc(doc: &SearchDoc) -> Self {
        let title = normalize_text(&doc.title);
        let description = doc.description.as_deref().map(normalize_text).unwrap_or_default();
        let slug = normalize_text(&doc.slug);

        let headings: Vec<IndexedHeading> = doc
            .headings
            .iter()
            .map(|h| IndexedHeading {
                id: h.id.clone(),
                text: h.text.clone(),
                level: h.level,
                normalized: normalize_text(&h.text),
            })
            .collect();
        let all_headings = headings
            .iter()
            .map(|h| h.normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            title_words: tokenize(&title),
            description_words: tokenize(&description),
            slug_words: tokenize(&slug),
            heading_words: tokenize(&all_headings),
            title,
            description,
            slug,
            content: fold_lowercase(&doc.content),
            content_raw: doc.content.clone(),
            headings,
        }
    }
}

/// Index every document, in corpus order.
pub fn build_index(docs: &[SearchDoc]) -> Vec<IndexedDoc> {
    docs.iter().map(IndexedDoc::from_doc).collect()
}

/// Same output as [`build_index`], one rayon task per document.
#[cfg(feature = "parallel")]
pub fn build_index_parallel(docs: &[SearchDoc]) -> Vec<IndexedDoc> {
    use rayon::prelude::*;
    docs.par_iter().map(IndexedDoc::from_doc).collect()
}

/// A document collection plus its lazily built, generation-scoped index.
///
/// Mutations take `&mut self`, so an index can never be observed for a
/// document set it wasn't built from. Searching only needs `&self` and is
/// safe from many threads at once; the first search after a mutation builds
/// the index, later ones reuse it.
#[derive(Debug, Default)]
pub struct Corpus {
    docs: Vec<SearchDoc>,
    generation: u64,
    index: OnceLock<Arc<[IndexedDoc]>>,
}

impl Corpus {
    pub fn new(docs: Vec<SearchDoc>) -> Self {
        Self {
            docs,
            generation: 0,
            index: OnceLock::new(),
        }
    }

    pub fn docs(&self) -> &[SearchDoc] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Bumped on every mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Look a document up by slug. First match wins if slugs repeat.
    pub fn get(&self, slug: &str) -> Option<&SearchDoc> {
        self.docs.iter().find(|doc| doc.slug == slug)
    }

    /// Swap metadata-only docs in `results` for the full local document
    /// with the same slug, where there is one.
    pub fn resolve(&self, results: &mut [SearchResult]) {
        for result in results {
            if let Some(doc) = self.get(&result.doc.slug) {
                result.doc = doc.clone();
            }
        }
    }

    /// Read a JSON array of documents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| Error::Io(format!("{}: {err}", path.display())))?;
        let docs: Vec<SearchDoc> =
            serde_json::from_str(&raw).map_err(|err| Error::Decode(format!("{}: {err}", path.display())))?;
        Ok(Self::new(docs))
    }

    pub fn push(&mut self, doc: SearchDoc) {
        self.docs.push(doc);
        self.invalidate();
    }

    pub fn replace(&mut self, docs: Vec<SearchDoc>) {
        self.docs = docs;
        self.invalidate();
    }

    /// Edit documents in place. The index is rebuilt on the next search.
    pub fn update<R>(&mut self, edit: impl FnOnce(&mut Vec<SearchDoc>) -> R) -> R {
        let result = edit(&mut self.docs);
        self.invalidate();
        result
    }

    /// The index for the current generation, built on first use.
    pub fn index(&self) -> &[IndexedDoc] {
        self.index.get_or_init(|| {
            tracing::info!(
                docs = self.docs.len(),
                generation = self.generation,
                "building search index"
            );
            Self::build(&self.docs).into()
        })
    }

    /// Has the current generation been indexed yet?
    pub fn is_indexed(&self) -> bool {
        self.index.get().is_some()
    }

    #[cfg(feature = "parallel")]
    fn build(docs: &[SearchDoc]) -> Vec<IndexedDoc> {
        if docs.len() >= PARALLEL_THRESHOLD {
            build_index_parallel(docs)
        } else {
            build_index(docs)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build(docs: &[SearchDoc]) -> Vec<IndexedDoc> {
        build_index(docs)
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.index = OnceLock::new();
    }
}

/// Clones share the already built index; it describes the same documents.
impl Clone for Corpus {
    fn clone(&self) -> Self {
        let index = OnceLock::new();
        if let Some(built) = self.index.get() {
            let _ = index.set(Arc::clone(built));
        }
        Self {
            docs: self.docs.clone(),
            generation: self.generation,
            index,
        }
    }
}

impl From<Vec<SearchDoc>> for Corpus {
    fn from(docs: Vec<SearchDoc>) -> Self {
        Self::new(docs)
    }
}
