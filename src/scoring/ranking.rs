// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get ordered.
//!
//! Sort order:
//! 1. **Score**, descending.
//! 2. **Ordinal** (position in the corpus), ascending.
//!
//! The ordinal tiebreak makes results independent of how the candidates were
//! accumulated: equal scores always come out in corpus order.

use std::cmp::Ordering;

/// A scored item and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<T> {
    pub score: u32,
    pub ordinal: usize,
    pub item: T,
}

impl<T> Ranked<T> {
    pub fn new(score: u32, ordinal: usize, item: T) -> Self {
        Self {
            score,
            ordinal,
            item,
        }
    }
}

/// `Less` means `a` ranks before `b`.
pub fn compare_ranked<T>(a: &Ranked<T>, b: &Ranked<T>) -> Ordering {
    b.score.cmp(&a.score).then(a.ordinal.cmp(&b.ordinal))
}
