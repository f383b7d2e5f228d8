//! Longest-increasing-subsequence anchor selection.
//!
//! Because identities are unique within a diff scope, the longest common
//! subsequence of the surviving entities' two orderings reduces to a
//! longest strictly-increasing subsequence of their after-positions taken
//! in before order. The patience algorithm computes one such subsequence
//! in O(n log n); everything on it is a stationary anchor, everything off
//! it must move. This minimizes the move count, which matters because
//! moves are the most expensive operation for a consumer to animate.

/// Indices into `seq` of one longest strictly-increasing subsequence,
/// in ascending index order.
pub fn longest_increasing_indices(seq: &[usize]) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }

    // tails[k] = index of the smallest tail value among increasing
    // subsequences of length k+1; prev links reconstruct the chain.
    let mut tails: Vec<usize> = Vec::with_capacity(seq.len());
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let pos = tails.partition_point(|&t| seq[t] < value);
        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut chain = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        chain.push(i);
        cursor = prev[i];
    }
    chain.reverse();
    chain
}

/// Flags for each position of `seq`: true when the position sits on the
/// chosen longest increasing subsequence (a stationary anchor).
pub fn stationary_flags(seq: &[usize]) -> Vec<bool> {
    let mut flags = vec![false; seq.len()];
    for i in longest_increasing_indices(seq) {
        flags[i] = true;
    }
    flags
}
