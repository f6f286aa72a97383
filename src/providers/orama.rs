// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Orama-style hosted index: `POST {endpoint}/search` with a bearer key.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::adapter::SearchAdapter;
use crate::error::{Error, Result};
use crate::index::Corpus;
use crate::query::{normalize_query, trim_query};
use crate::types::{DocMeta, SearchDoc, SearchResult};

use super::{degrade, read_json};

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct OramaSearch {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    term: &'a str,
    limit: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<OramaHit>,
}

#[derive(Debug, Deserialize)]
struct OramaHit {
    id: String,
    score: f64,
    document: OramaDocument,
}

#[derive(Debug, Deserialize)]
struct OramaDocument {
    slug: Option<String>,
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    content: String,
    anchor: Option<String>,
    heading: Option<String>,
}

impl OramaHit {
    fn into_result(self) -> Result<SearchResult> {
        if !self.score.is_finite() {
            return Err(Error::Decode(format!("non-finite score for '{}'", self.id)));
        }
        let document = self.document;
        let mut doc = SearchDoc::from(DocMeta {
            slug: document.slug.unwrap_or(self.id),
            title: document.title,
            description: document.description,
        });
        doc.content = document.content;
        Ok(SearchResult {
            doc,
            score: self.score,
            snippet: None,
            anchor: document.anchor,
            heading: document.heading,
        })
    }
}

impl OramaSearch {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint, api_key)
    }

    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn query(&self, term: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.endpoint);
        reqwest::Url::parse(&url).map_err(|err| Error::InvalidEndpoint(format!("{url}: {err}")))?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SearchBody { term, limit })
            .send()
            .await?;
        let body: SearchResponse = read_json(response).await?;

        body.hits
            .into_iter()
            .take(limit)
            .map(OramaHit::into_result)
            .collect()
    }
}

#[async_trait]
impl SearchAdapter for OramaSearch {
    async fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        if normalize_query(query).is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut results = degrade("orama", query, self.query(trim_query(query), limit).await);
        corpus.resolve(&mut results);
        Ok(results)
    }
}
