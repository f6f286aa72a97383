//! Bounded top-K selection against sort-and-truncate.

use crate::oracles::oracle_top_k;
use docsift::scoring::ranking::Ranked;
use docsift::search::topk::TopK;
use proptest::prelude::*;

fn select(scores: &[u32], k: usize) -> Vec<(u32, usize)> {
    let mut top = TopK::new(k);
    for (ordinal, &score) in scores.iter().enumerate() {
        top.push(Ranked::new(score, ordinal, ()));
        assert_within_limit(top.len(), k);
    }
    top.into_sorted().into_iter().map(|r| (r.score, r.ordinal)).collect()
}

fn assert_within_limit(len: usize, k: usize) {
    assert!(len <= k, "top-k grew to {len} with limit {k}");
}

proptest! {
    #[test]
    fn prop_matches_sort_and_truncate(scores in prop::collection::vec(0u32..20, 0..60), k in 0usize..15) {
        prop_assert_eq!(select(&scores, k), oracle_top_k(&scores, k));
    }

    #[test]
    fn prop_never_exceeds_limit(scores in prop::collection::vec(any::<u32>(), 0..100), k in 0usize..10) {
        prop_assert!(select(&scores, k).len() == scores.len().min(k));
    }
}
