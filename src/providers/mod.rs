// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hosted search services behind the [`SearchAdapter`](crate::SearchAdapter)
//! contract.
//!
//! Providers never fail a search. A transport error, an error status or an
//! unexpected payload is logged at `warn` and the search comes back empty,
//! so a flaky third party degrades the search box instead of breaking it.

mod algolia;
mod orama;

pub use algolia::AlgoliaSearch;
pub use orama::OramaSearch;

use crate::error::{Error, Result};
use crate::types::SearchResult;

/// Log and swallow a provider failure.
fn degrade(provider: &'static str, query: &str, outcome: Result<Vec<SearchResult>>) -> Vec<SearchResult> {
    match outcome {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!(provider, query, error = %err, "search provider failed, returning no results");
            Vec::new()
        }
    }
}

/// Rank-based score for providers that only return an ordering.
/// The first of `total` hits scores `total`, the last scores 1.
fn rank_score(rank: usize, total: usize) -> f64 {
    (total - rank) as f64
}

async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    Ok(response.json().await?)
}
