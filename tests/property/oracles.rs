//! Reference oracles for differential testing.
//!
//! Simple, slow implementations that serve as ground truth for the
//! optimized ones.

/// Classic Levenshtein edit distance via dynamic programming.
///
/// Wagner-Fischer, two rows. O(nm) time, O(n) space.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let n = b.len();

    if a.is_empty() {
        return n;
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, c1) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in b.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Is `needle` an in-order (not necessarily contiguous) subsequence?
pub fn oracle_is_subsequence(haystack: &str, needle: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|wanted| rest.any(|c| c == wanted))
}

/// Sort everything, then truncate.
pub fn oracle_top_k(scores: &[u32], k: usize) -> Vec<(u32, usize)> {
    let mut ranked: Vec<(u32, usize)> = scores.iter().copied().zip(0..).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracles_sanity() {
        assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
        assert_eq!(oracle_levenshtein("", "abc"), 3);
        assert!(oracle_is_subsequence("documentation", "dcm"));
        assert!(!oracle_is_subsequence("documentation", "mcd"));
        assert_eq!(oracle_top_k(&[1, 5, 5, 2], 3), vec![(5, 1), (5, 2), (2, 3)]);
    }
}
