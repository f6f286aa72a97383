// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-K accumulation.
//!
//! Fill up to `limit`, then each new candidate evicts the current worst only
//! if it scores strictly higher. Finding the worst is a linear scan, so the
//! whole pass is O(n·k), with one sort at the end.
//!
//! **Invariant**: `len() <= limit` at all times.
//!
//! Candidates must be pushed in ascending ordinal order. Then "strictly
//! higher" keeps the earlier of two equal scores, which is exactly what the
//! final ordinal tiebreak in [`compare_ranked`] asks for.

use crate::scoring::ranking::{compare_ranked, Ranked};

#[derive(Debug, Clone)]
pub struct TopK<T> {
    limit: usize,
    items: Vec<Ranked<T>>,
}

impl<T> TopK<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            // `limit` may be usize::MAX for "unbounded"
            items: Vec::with_capacity(limit.min(64)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offer a candidate. Returns whether it was kept.
    pub fn push(&mut self, candidate: Ranked<T>) -> bool {
        if self.items.len() < self.limit {
            self.items.push(candidate);
            return true;
        }

        // The worst item: lowest score, latest ordinal among equals.
        let Some((worst, _)) = self
            .items
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| compare_ranked(a, b))
        else {
            return false;
        };

        if candidate.score > self.items[worst].score {
            self.items[worst] = candidate;
            true
        } else {
            false
        }
    }

    /// Best first.
    pub fn into_sorted(mut self) -> Vec<Ranked<T>> {
        self.items.sort_by(compare_ranked);
        self.items
    }
}
