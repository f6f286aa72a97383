// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TTL- and capacity-bounded result cache.
//!
//! Eviction is oldest-inserted first. A fresh hit re-inserts its entry, so
//! insertion order approximates recency of use. Expired entries are kept
//! around as stale: their results can still be shown while a revalidation
//! (with their ETag) is in flight.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::types::SearchResult;

/// `(endpoint, normalized query, limit)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: String,
    pub query: String,
    pub limit: usize,
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub at: Instant,
    pub etag: Option<String>,
    pub results: Arc<[SearchResult]>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.at) < ttl
    }
}

#[derive(Debug, Clone)]
pub enum Lookup {
    Fresh(CacheEntry),
    Stale(CacheEntry),
    Miss,
}

#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    ttl: Duration,
    entries: HashMap<CacheKey, (u64, CacheEntry)>,
    /// Insertion sequence → key. The first entry is the oldest.
    order: BTreeMap<u64, CacheKey>,
    next_seq: u64,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Classify the entry for `key`. Fresh hits move to the back of the
    /// eviction order.
    pub fn lookup(&mut self, key: &CacheKey, now: Instant) -> Lookup {
        let Some((_, entry)) = self.entries.get(key) else {
            return Lookup::Miss;
        };
        if entry.is_fresh(now, self.ttl) {
            let entry = entry.clone();
            self.touch(key);
            Lookup::Fresh(entry)
        } else {
            Lookup::Stale(entry.clone())
        }
    }

    /// Classify without touching the eviction order.
    pub fn peek(&self, key: &CacheKey, now: Instant) -> Lookup {
        match self.entries.get(key) {
            Some((_, entry)) if entry.is_fresh(now, self.ttl) => Lookup::Fresh(entry.clone()),
            Some((_, entry)) => Lookup::Stale(entry.clone()),
            None => Lookup::Miss,
        }
    }

    /// Store `entry` as the newest. Returns the key evicted to make room.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) -> Option<CacheKey> {
        let mut evicted = None;
        if let Some((seq, _)) = self.entries.remove(&key) {
            self.order.remove(&seq);
        } else if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.order.pop_first() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        let seq = self.bump();
        self.order.insert(seq, key.clone());
        self.entries.insert(key, (seq, entry));
        evicted
    }

    pub fn remove(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let (seq, entry) = self.entries.remove(key)?;
        self.order.remove(&seq);
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn touch(&mut self, key: &CacheKey) {
        let seq = self.bump();
        if let Some(slot) = self.entries.get_mut(key) {
            self.order.remove(&slot.0);
            slot.0 = seq;
            self.order.insert(seq, key.clone());
        }
    }

    fn bump(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
