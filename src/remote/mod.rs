// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caching client for server-side search.
//!
//! One [`SearchClient`] per application, cloned wherever it's needed (the
//! state lives behind an `Arc`). Per request:
//!
//! ```text
//! key = (endpoint, normalized query, limit)
//!   fresh cache entry ──────────────▶ return it (no network)
//!   request already in flight ──────▶ await the same future
//!   otherwise ──────────────────────▶ GET endpoint?q=&limit=
//!                                      (If-None-Match: stale ETag)
//!        304 ──▶ stale results, timestamp refreshed
//!        400 ──▶ no results
//!        2xx ──▶ parse, cache, return
//!        else ─▶ Error::Status
//! ```
//!
//! Requests run as spawned tasks. A caller that cancels stops waiting, but
//! the request itself carries on for anyone else waiting on it and still
//! lands in the cache.

mod adapter;
pub mod cache;
mod session;

pub use adapter::RemoteSearch;
pub use session::{SearchSession, SearchState};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::{self, BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use reqwest::header::{ETAG, IF_NONE_MATCH};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::query::QueryPolicy;
use crate::types::{DocMeta, SearchDoc, SearchResult};

use cache::{CacheEntry, CacheKey, Lookup, ResultCache};

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<[SearchResult]>>>>;

/// One hit as the search endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteHit {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub score: f64,
}

impl RemoteHit {
    fn validate(&self) -> Result<()> {
        if self.slug.is_empty() {
            return Err(Error::Decode("hit with empty slug".into()));
        }
        if !self.score.is_finite() {
            return Err(Error::Decode(format!("non-finite score for '{}'", self.slug)));
        }
        Ok(())
    }

    /// The hit carries metadata only; the doc has empty content.
    pub fn into_result(self) -> SearchResult {
        let meta = DocMeta {
            slug: self.slug,
            title: self.title,
            description: self.description,
        };
        SearchResult {
            doc: SearchDoc::from(meta),
            score: self.score,
            snippet: self.snippet,
            anchor: self.anchor,
            heading: self.heading,
        }
    }
}

impl From<&SearchResult> for RemoteHit {
    fn from(result: &SearchResult) -> Self {
        Self {
            slug: result.doc.slug.clone(),
            title: result.doc.title.clone(),
            description: result.doc.description.clone(),
            snippet: result.snippet.clone(),
            anchor: result.anchor.clone(),
            heading: result.heading.clone(),
            score: result.score,
        }
    }
}

/// Cached results for a key, fresh or not.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached {
    pub results: Vec<SearchResult>,
    pub fresh: bool,
}

#[derive(Clone)]
pub struct SearchClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    policy: QueryPolicy,
    cache: Mutex<ResultCache>,
    inflight: Mutex<HashMap<CacheKey, SharedFetch>>,
}

/// Drops the in-flight entry when the request task ends, even by panic.
struct InFlightGuard {
    inner: Arc<Inner>,
    key: CacheKey,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.inner.inflight.lock().remove(&self.key);
    }
}

impl SearchClient {
    /// Default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(&SearchConfig::default())
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Bring your own `reqwest::Client` (proxies, TLS roots, user agent).
    pub fn with_http(http: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                http,
                policy: config.query_policy(),
                cache: Mutex::new(ResultCache::new(config.cache_capacity, config.cache_ttl())),
                inflight: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn key(&self, endpoint: &str, query: &str, limit: usize) -> CacheKey {
        CacheKey {
            endpoint: endpoint.to_string(),
            query: self.inner.policy.normalize(query),
            limit,
        }
    }

    /// Whatever is cached for this request, without touching the network or
    /// the eviction order. Stale results are meant for provisional display.
    pub fn cached(&self, endpoint: &str, query: &str, limit: usize) -> Option<Cached> {
        let key = self.key(endpoint, query, limit);
        match self.inner.cache.lock().peek(&key, Instant::now()) {
            Lookup::Fresh(entry) => Some(Cached {
                results: entry.results.to_vec(),
                fresh: true,
            }),
            Lookup::Stale(entry) => Some(Cached {
                results: entry.results.to_vec(),
                fresh: false,
            }),
            Lookup::Miss => None,
        }
    }

    pub async fn search(&self, endpoint: &str, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        self.search_with_cancel(endpoint, query, limit, &CancellationToken::new())
            .await
    }

    /// Like [`search`](Self::search), but gives up with [`Error::Cancelled`]
    /// once `cancel` fires. Other callers and the cache are unaffected.
    pub async fn search_with_cancel(
        &self,
        endpoint: &str,
        query: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let key = self.key(endpoint, query, limit);
        let stale = match self.inner.cache.lock().lookup(&key, Instant::now()) {
            Lookup::Fresh(entry) => {
                tracing::debug!(endpoint, query = %key.query, "search cache hit");
                return Ok(entry.results.to_vec());
            }
            Lookup::Stale(entry) => Some(entry),
            Lookup::Miss => None,
        };

        let trimmed = self.inner.policy.trim(query).to_string();
        let request = self.request(key, trimmed, stale);

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(Error::Cancelled),
            outcome = request => outcome.map(|results| results.to_vec()),
        }
    }

    /// Join the in-flight request for `key`, or start one.
    ///
    /// A request stores its results before leaving the in-flight map, so a
    /// fresh entry found under the `inflight` lock covers one that finished
    /// after the caller's first cache check.
    fn request(&self, key: CacheKey, query: String, stale: Option<CacheEntry>) -> SharedFetch {
        let mut inflight = self.inner.inflight.lock();
        if let Some(existing) = inflight.get(&key) {
            tracing::debug!(endpoint = %key.endpoint, query = %key.query, "joining in-flight search");
            return existing.clone();
        }
        if let Lookup::Fresh(entry) = self.inner.cache.lock().lookup(&key, Instant::now()) {
            tracing::debug!(endpoint = %key.endpoint, query = %key.query, "search finished before joining");
            return future::ready(Ok::<_, Error>(entry.results)).boxed().shared();
        }

        let guard = InFlightGuard {
            inner: Arc::clone(&self.inner),
            key: key.clone(),
        };
        let task = tokio::spawn(async move {
            let outcome = guard.inner.fetch(&guard.key, &query, stale).await;
            drop(guard);
            outcome
        });

        let shared = async move {
            task.await
                .unwrap_or_else(|err| Err(Error::Transport(format!("search task failed: {err}"))))
        }
        .boxed()
        .shared();

        inflight.insert(key, shared.clone());
        shared
    }

    pub fn cache_len(&self) -> usize {
        self.inner.cache.lock().len()
    }

    pub fn in_flight(&self) -> usize {
        self.inner.inflight.lock().len()
    }

    pub fn cache_ttl(&self) -> Duration {
        self.inner.cache.lock().ttl()
    }

    pub fn clear_cache(&self) {
        self.inner.cache.lock().clear();
    }
}

impl Inner {
    async fn fetch(&self, key: &CacheKey, query: &str, stale: Option<CacheEntry>) -> Result<Arc<[SearchResult]>> {
        let mut url = reqwest::Url::parse(&key.endpoint)
            .map_err(|err| Error::InvalidEndpoint(format!("{}: {err}", key.endpoint)))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &key.limit.to_string());

        let mut request = self.http.get(url);
        if let Some(etag) = stale.as_ref().and_then(|entry| entry.etag.as_deref()) {
            request = request.header(IF_NONE_MATCH, etag);
        }

        tracing::debug!(endpoint = %key.endpoint, query = %key.query, revalidate = stale.is_some(), "search request");
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            let Some(entry) = stale else {
                return Err(Error::Status(status.as_u16()));
            };
            let results = Arc::clone(&entry.results);
            self.cache.lock().insert(
                key.clone(),
                CacheEntry {
                    at: Instant::now(),
                    ..entry
                },
            );
            return Ok(results);
        }
        if status == StatusCode::BAD_REQUEST {
            tracing::debug!(query = %key.query, "search endpoint rejected query");
            return Ok(Arc::from(Vec::new()));
        }
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let hits: Vec<RemoteHit> = response.json().await?;
        for hit in &hits {
            hit.validate()?;
        }

        let results: Arc<[SearchResult]> = hits.into_iter().map(RemoteHit::into_result).collect();
        let evicted = self.cache.lock().insert(
            key.clone(),
            CacheEntry {
                at: Instant::now(),
                etag,
                results: Arc::clone(&results),
            },
        );
        if let Some(evicted) = evicted {
            tracing::debug!(query = %evicted.query, "evicted oldest cached search");
        }
        Ok(results)
    }
}
