//! Ranking metrics: Precision@K, Recall@K, AP/MAP, NDCG@K, and RR/MRR.
//!
//! Item identifiers are `u64`. `actual` is the ground-truth relevant set for
//! one query (duplicates collapse on entry), `predicted` is the system's
//! ranked output, best first, and `k` bounds how many leading predictions are
//! scored. Degenerate divisors (empty ground truth, `k == 0`, no relevant hit
//! where AP needs one, empty batch) are not guarded: they divide through and
//! yield IEEE NaN, which callers must treat as a contract violation on their
//! side. `reciprocal_rank` is the one exception: no hit in the top-K is a
//! well-defined outcome and returns exactly 0.0.

use crate::error::{RankevalError, Result};
use std::collections::HashSet;

/// Coerce a ground-truth slice to a set of identifiers, collapsing duplicates.
fn id_set(ids: &[u64]) -> HashSet<u64> {
    ids.iter().copied().collect()
}

/// Number of distinct relevant items in the top-K predictions:
/// |relevant ∩ set(predicted[..k])|.
fn hits_at_k(relevant: &HashSet<u64>, predicted: &[u64], k: usize) -> usize {
    let top_k: HashSet<u64> = predicted.iter().take(k).copied().collect();
    relevant.intersection(&top_k).count()
}

/// Recall at K: proportion of all relevant items that appear in the top-K.
/// Returns |relevant ∩ top-K| / |relevant|. An empty `actual` divides by
/// zero and returns NaN.
pub fn recall_at_k(actual: &[u64], predicted: &[u64], k: usize) -> f32 {
    let relevant = id_set(actual);
    hits_at_k(&relevant, predicted, k) as f32 / relevant.len() as f32
}

/// Precision at K: proportion of the top-K predictions that are relevant.
/// Returns |relevant ∩ top-K| / K. The divisor is the requested `k`, not the
/// truncated length, so a `predicted` shorter than `k` is scored as if the
/// missing slots were returned and irrelevant. `k == 0` returns NaN.
pub fn precision_at_k(actual: &[u64], predicted: &[u64], k: usize) -> f32 {
    let relevant = id_set(actual);
    hits_at_k(&relevant, predicted, k) as f32 / k as f32
}

/// Average Precision: mean of `precision_at_k` sampled at each rank in the
/// top-K that holds a relevant item. Indexes `predicted[0..k]` directly, so
/// `k` must not exceed `predicted.len()`. If the top-K contains no relevant
/// item the sample list is empty and the result is NaN.
pub fn average_precision(actual: &[u64], predicted: &[u64], k: usize) -> f32 {
    let relevant = id_set(actual);
    let mut sum = 0.0;
    let mut hits = 0usize;
    for i in 0..k {
        if relevant.contains(&predicted[i]) {
            sum += precision_at_k(actual, predicted, i + 1);
            hits += 1;
        }
    }
    sum / hits as f32
}

/// Mean Average Precision: mean of `average_precision` over a batch of
/// queries paired positionally. Fails with `InvalidArgument` if the two
/// batches differ in length, before any metric is computed. An empty batch
/// divides by zero and returns Ok(NaN).
pub fn mean_average_precision(actuals: &[Vec<u64>], predicteds: &[Vec<u64>], k: usize) -> Result<f32> {
    if actuals.len() != predicteds.len() {
        return Err(RankevalError::InvalidArgument(format!(
            "batch length mismatch: {} ground-truth sets vs {} ranked lists",
            actuals.len(),
            predicteds.len()
        )));
    }
    let sum: f32 = actuals
        .iter()
        .zip(predicteds.iter())
        .map(|(actual, predicted)| average_precision(actual, predicted, k))
        .sum();
    Ok(sum / actuals.len() as f32)
}

/// NDCG at K: binary-gain discounted cumulative gain over the top-K,
/// normalized by the ideal DCG of `min(k, |relevant|)` leading hits.
/// DCG = Σ gain(i) / log2(i + 2) for 0-based i, i.e. log2(rank + 1).
/// An empty `actual` (or `k == 0`) makes IDCG zero and the result NaN.
pub fn ndcg_at_k(actual: &[u64], predicted: &[u64], k: usize) -> f32 {
    let relevant = id_set(actual);
    let dcg: f32 = predicted
        .iter()
        .take(k)
        .enumerate()
        .filter(|(_, id)| relevant.contains(*id))
        .map(|(i, _)| 1.0 / (i as f32 + 2.0).log2())
        .sum();
    let idcg: f32 = (0..relevant.len().min(k))
        .map(|i| 1.0 / (i as f32 + 2.0).log2())
        .sum();
    dcg / idcg
}

/// Reciprocal Rank: 1 / (1-based rank of the first relevant item) within the
/// top-K, scanning in order and stopping at the first hit. Returns exactly
/// 0.0 when no relevant item appears in the scanned prefix.
pub fn reciprocal_rank(actual: &[u64], predicted: &[u64], k: usize) -> f32 {
    let relevant = id_set(actual);
    for (i, id) in predicted.iter().take(k).enumerate() {
        if relevant.contains(id) {
            return 1.0 / (i + 1) as f32;
        }
    }
    0.0
}

/// Mean Reciprocal Rank: mean of `reciprocal_rank` over a batch of queries
/// paired positionally. Fails with `InvalidArgument` on batch length
/// mismatch. An empty batch divides by zero and returns Ok(NaN) — unlike the
/// single-query no-hit case, which is a defined 0.0.
pub fn mean_reciprocal_rank(actuals: &[Vec<u64>], predicteds: &[Vec<u64>], k: usize) -> Result<f32> {
    if actuals.len() != predicteds.len() {
        return Err(RankevalError::InvalidArgument(format!(
            "batch length mismatch: {} ground-truth sets vs {} ranked lists",
            actuals.len(),
            predicteds.len()
        )));
    }
    let sum: f32 = actuals
        .iter()
        .zip(predicteds.iter())
        .map(|(actual, predicted)| reciprocal_rank(actual, predicted, k))
        .sum();
    Ok(sum / actuals.len() as f32)
}
