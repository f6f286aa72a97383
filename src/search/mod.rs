// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Local search: where the scores turn into a result list.
//!
//! Normalize the query, reuse (or build) the corpus index, score every
//! document, keep the best `limit`. Pure and synchronous; the same corpus
//! generation and query always give the same results.

pub mod topk;

use async_trait::async_trait;

use crate::adapter::SearchAdapter;
use crate::error::Result;
use crate::index::Corpus;
use crate::query::{ParsedQuery, QueryPolicy};
use crate::scoring::ranking::Ranked;
use crate::scoring::{score_doc, DocScore, Weights};
use crate::types::SearchResult;

use topk::TopK;

/// The in-memory engine.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    weights: Weights,
    policy: QueryPolicy,
}

impl LocalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_policy(mut self, policy: QueryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rank the corpus. An empty (or all-whitespace) query lists the first
    /// `limit` documents in corpus order with score 0.
    pub fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Vec<SearchResult> {
        let limit = limit.unwrap_or(usize::MAX);
        let parsed = ParsedQuery::new(query, &self.policy);

        if parsed.is_empty() {
            return corpus
                .docs()
                .iter()
                .take(limit)
                .cloned()
                .map(SearchResult::unranked)
                .collect();
        }

        let mut top: TopK<DocScore> = TopK::new(limit);
        for (ordinal, doc) in corpus.index().iter().enumerate() {
            if let Some(scored) = score_doc(doc, &parsed, &self.weights) {
                top.push(Ranked::new(scored.score, ordinal, scored));
            }
        }

        let docs = corpus.docs();
        top.into_sorted()
            .into_iter()
            .map(|ranked| SearchResult {
                doc: docs[ranked.ordinal].clone(),
                score: f64::from(ranked.score),
                snippet: ranked.item.snippet,
                anchor: ranked.item.anchor,
                heading: ranked.item.heading,
            })
            .collect()
    }
}

#[async_trait]
impl SearchAdapter for LocalSearch {
    async fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        Ok(LocalSearch::search(self, query, corpus, limit))
    }

    async fn index(&self, corpus: &Corpus) -> Result<()> {
        corpus.index();
        Ok(())
    }
}

/// [`LocalSearch::search`] with default weights.
pub fn search(query: &str, corpus: &Corpus, limit: Option<usize>) -> Vec<SearchResult> {
    LocalSearch::new().search(query, corpus, limit)
}
