// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A document's score is a sum of independent signals: fuzzy title and
//! description matches, per-term field tiers, an exact-match bonus, the best
//! heading, and the earliest content hit. The weights are a policy table
//! ([`Weights`]), not a contract; the defaults reproduce the shipped ranking.

mod core;
mod matchers;
pub mod ranking;
mod terms;

pub use core::*;
pub use matchers::*;
pub use terms::*;
