// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance and subsequence scoring.
//!
//! Two cheap matchers, both linear in the input. The typo matcher answers
//! "is this word one edit away?", the subsequence scorer answers "how tightly
//! do the query characters appear in order?".

mod subsequence;
mod typo;

pub use subsequence::*;
pub use typo::*;
