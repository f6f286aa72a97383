// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::adapter::SearchAdapter;
use crate::error::Result;
use crate::index::Corpus;
use crate::query::normalize_query;
use crate::types::SearchResult;

use super::SearchClient;

/// [`SearchClient`] bound to one endpoint, usable wherever a
/// [`SearchAdapter`] is expected.
///
/// Hits whose slug is in the corpus come back with the full local document;
/// the rest keep the metadata the endpoint sent.
#[derive(Clone)]
pub struct RemoteSearch {
    client: SearchClient,
    endpoint: String,
    default_limit: usize,
}

impl RemoteSearch {
    pub fn new(client: SearchClient, endpoint: impl Into<String>, default_limit: usize) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            default_limit,
        }
    }
}

#[async_trait]
impl SearchAdapter for RemoteSearch {
    async fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        if normalize_query(query).is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.unwrap_or(self.default_limit);
        let mut results = self.client.search(&self.endpoint, query, limit).await?;
        corpus.resolve(&mut results);
        Ok(results)
    }
}
