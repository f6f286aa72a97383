// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type on top of [`SearchClient`].
//!
//! Each keystroke calls [`SearchSession::set_query`]. The previous request is
//! cancelled, the new one waits out the debounce, then publishes into a
//! `watch` channel:
//!
//! 1. stale cached results right away, with `loading = true`
//! 2. the final results (or an error message and no results)
//!
//! A superseded request never publishes anything. The check and the publish
//! happen under the same lock that `set_query` uses to swap tokens, so a slow
//! response can't overwrite a newer query's state.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::query::normalize_query;
use crate::types::SearchResult;

use super::{Cached, SearchClient};

/// What the UI renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct SearchSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: SearchClient,
    endpoint: String,
    limit: usize,
    debounce: Duration,
    state: watch::Sender<SearchState>,
    current: Mutex<Option<CancellationToken>>,
}

impl SearchSession {
    pub fn new(client: SearchClient, endpoint: impl Into<String>, config: &SearchConfig) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(SessionInner {
                client,
                endpoint: endpoint.into(),
                limit: config.default_limit,
                debounce: config.debounce(),
                state,
                current: Mutex::new(None),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Supersede whatever is running with `query`.
    ///
    /// A blank query clears the state immediately. The returned handle
    /// finishes once this query has published (or been superseded).
    pub fn set_query(&self, query: impl Into<String>) -> JoinHandle<()> {
        let query = query.into();
        let token = CancellationToken::new();
        {
            let mut current = self.inner.current.lock();
            if let Some(previous) = current.replace(token.clone()) {
                previous.cancel();
            }
            if normalize_query(&query).is_empty() {
                self.inner.state.send_replace(SearchState {
                    query,
                    ..SearchState::default()
                });
                return tokio::spawn(async {});
            }
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run(query, token).await })
    }

    /// Abandon the running request, keeping whatever was last published.
    pub fn cancel(&self) {
        let mut current = self.inner.current.lock();
        if let Some(token) = current.take() {
            token.cancel();
        }
        self.inner.state.send_modify(|state| state.loading = false);
    }
}

impl SessionInner {
    async fn run(&self, query: String, token: CancellationToken) {
        tokio::select! {
            biased;
            () = token.cancelled() => return,
            () = tokio::time::sleep(self.debounce) => {}
        }

        match self.client.cached(&self.endpoint, &query, self.limit) {
            Some(Cached { fresh: true, .. }) => {}
            Some(Cached { results, fresh: false }) => {
                self.publish(&token, |state| {
                    *state = SearchState {
                        query: query.clone(),
                        results,
                        loading: true,
                        error: None,
                    };
                });
            }
            None => {
                self.publish(&token, |state| {
                    state.query = query.clone();
                    state.loading = true;
                    state.error = None;
                });
            }
        }

        let outcome = self
            .client
            .search_with_cancel(&self.endpoint, &query, self.limit, &token)
            .await;

        match outcome {
            Ok(results) => self.publish(&token, |state| {
                *state = SearchState {
                    query: query.clone(),
                    results,
                    loading: false,
                    error: None,
                };
            }),
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                tracing::debug!(query = %query, error = %err, "search failed");
                self.publish(&token, |state| {
                    *state = SearchState {
                        query: query.clone(),
                        results: Vec::new(),
                        loading: false,
                        error: Some(err.to_string()),
                    };
                });
            }
        }
    }

    fn publish(&self, token: &CancellationToken, update: impl FnOnce(&mut SearchState)) {
        let _current = self.current.lock();
        if token.is_cancelled() {
            return;
        }
        self.state.send_modify(update);
    }
}
