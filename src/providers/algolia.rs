// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Algolia-style hosted index.
//!
//! `POST {host}/1/indexes/{index}/query` with the application id and a
//! search-only key in headers. Hits are returned best first with no usable
//! score, so results are scored by rank.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::adapter::SearchAdapter;
use crate::error::{Error, Result};
use crate::index::Corpus;
use crate::query::{normalize_query, trim_query};
use crate::types::{DocMeta, SearchDoc, SearchResult};

use super::{degrade, rank_score, read_json};

const DEFAULT_HITS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct AlgoliaSearch {
    http: reqwest::Client,
    host: String,
    index: String,
    app_id: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryBody<'a> {
    query: &'a str,
    hits_per_page: usize,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    hits: Vec<AlgoliaHit>,
}

#[derive(Debug, Deserialize)]
struct AlgoliaHit {
    #[serde(rename = "objectID")]
    object_id: String,
    slug: Option<String>,
    #[serde(default)]
    title: String,
    description: Option<String>,
    content: Option<String>,
    anchor: Option<String>,
    heading: Option<String>,
    #[serde(rename = "_snippetResult")]
    snippet_result: Option<SnippetResult>,
}

#[derive(Debug, Deserialize)]
struct SnippetResult {
    content: Option<SnippetValue>,
}

#[derive(Debug, Deserialize)]
struct SnippetValue {
    value: String,
}

impl AlgoliaHit {
    fn into_result(self, score: f64) -> SearchResult {
        let snippet = self
            .snippet_result
            .and_then(|snippet| snippet.content)
            .map(|content| content.value);
        let mut doc = SearchDoc::from(DocMeta {
            slug: self.slug.unwrap_or(self.object_id),
            title: self.title,
            description: self.description,
        });
        doc.content = self.content.unwrap_or_default();
        SearchResult {
            doc,
            score,
            snippet,
            anchor: self.anchor,
            heading: self.heading,
        }
    }
}

impl AlgoliaSearch {
    /// `host` is the base URL, e.g. `https://APPID-dsn.algolia.net`.
    pub fn new(
        host: impl Into<String>,
        index: impl Into<String>,
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::with_http(reqwest::Client::new(), host, index, app_id, api_key)
    }

    pub fn with_http(
        http: reqwest::Client,
        host: impl Into<String>,
        index: impl Into<String>,
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            host: host.into().trim_end_matches('/').to_string(),
            index: index.into(),
            app_id: app_id.into(),
            api_key: api_key.into(),
        }
    }

    async fn query(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let url = format!("{}/1/indexes/{}/query", self.host, self.index);
        reqwest::Url::parse(&url).map_err(|err| Error::InvalidEndpoint(format!("{url}: {err}")))?;

        let response = self
            .http
            .post(&url)
            .header("X-Algolia-Application-Id", &self.app_id)
            .header("X-Algolia-API-Key", &self.api_key)
            .json(&QueryBody {
                query,
                hits_per_page: limit,
            })
            .send()
            .await?;
        let body: QueryResponse = read_json(response).await?;

        let mut hits = body.hits;
        hits.truncate(limit);
        let total = hits.len();
        Ok(hits
            .into_iter()
            .enumerate()
            .map(|(rank, hit)| hit.into_result(rank_score(rank, total)))
            .collect())
    }
}

#[async_trait]
impl SearchAdapter for AlgoliaSearch {
    async fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        if normalize_query(query).is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.unwrap_or(DEFAULT_HITS_PER_PAGE);
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut results = degrade("algolia", query, self.query(trim_query(query), limit).await);
        corpus.resolve(&mut results);
        Ok(results)
    }
}
