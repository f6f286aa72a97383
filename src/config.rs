// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration.
//!
//! Defaults, then an optional TOML file, then `DOCSIFT_*` environment
//! variables (`DOCSIFT_CACHE_TTL_SECS=60`), merged with Figment.

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::{QueryPolicy, MAX_QUERY_LEN};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DOCSIFT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries are truncated to this many characters.
    pub max_query_len: usize,
    /// Remote result cache: entries kept before the oldest is evicted.
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
    /// Quiet period before a typed query is sent.
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_len: MAX_QUERY_LEN,
            cache_capacity: 200,
            cache_ttl_secs: 5 * 60,
            debounce_ms: 100,
            request_timeout_ms: 10_000,
            default_limit: 10,
        }
    }
}

impl SearchConfig {
    /// Defaults overridden by the environment.
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment())
    }

    /// Defaults, then `path`, then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Config(format!("config file not found: {}", path.display())));
        }
        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_query_len == 0 {
            return Err(Error::Config("max_query_len must be positive".into()));
        }
        if self.cache_capacity == 0 {
            return Err(Error::Config("cache_capacity must be positive".into()));
        }
        Ok(())
    }

    pub fn query_policy(&self) -> QueryPolicy {
        QueryPolicy::new(self.max_query_len)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
