// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The plug-in boundary every search backend implements.
//!
//! Uniformly async: the local engine answers immediately, remote backends
//! await the network, and callers don't need to know which one they hold.

use async_trait::async_trait;

use crate::error::Result;
use crate::index::Corpus;
use crate::types::SearchResult;

#[async_trait]
pub trait SearchAdapter: Send + Sync {
    /// Rank `corpus` against `query`. `limit: None` means unbounded.
    ///
    /// Remote backends may ignore the corpus or use it only to resolve slugs.
    async fn search(&self, query: &str, corpus: &Corpus, limit: Option<usize>) -> Result<Vec<SearchResult>>;

    /// Pre-build whatever the backend needs. Most have nothing to do.
    async fn index(&self, _corpus: &Corpus) -> Result<()> {
        Ok(())
    }
}
