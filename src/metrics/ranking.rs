//! Ranking metrics over an already-ordered prediction sequence.
//!
//! This module provides the two leaf computations of the crate:
//! precision restricted to the first k entries of a ranked sequence, and
//! Average Precision (AP) summarizing where a target label lands across
//! the whole ranking. Both operate on a sequence that is *already* ordered
//! from most to least confident; turning raw prediction scores into such a
//! sequence is the job of [`crate::metrics::scorer`].

use crate::core::{
    error::{RankEvalError, Result},
    types::Label,
};

/// Compute precision over the first `k` entries of a ranked sequence.
///
/// `ranked` is ordered from most to least confident (rank 1 first). The
/// result is the fraction of the first `k` entries equal to `target`,
/// always in `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`RankEvalError::InvalidParameter`] if `ranked` is empty or `k`
/// lies outside `[1, ranked.len()]`. A `k` of zero would divide by zero in
/// the naive formulation, so it is rejected rather than clamped.
///
/// # Examples
///
/// ```
/// use rankeval_rust::metrics::ranking::precision_at_k;
///
/// let ranked = vec![1, 0, 1, 0];
/// assert_eq!(precision_at_k(&ranked, 1, 2).unwrap(), 0.5);
/// ```
pub fn precision_at_k(ranked: &[Label], target: Label, k: usize) -> Result<f64> {
    validate_non_empty(ranked)?;
    if k == 0 || k > ranked.len() {
        return Err(RankEvalError::invalid_parameter(
            "k",
            k.to_string(),
            format!("must be in [1, {}]", ranked.len()),
        ));
    }

    let hits = ranked[..k].iter().filter(|&&label| label == target).count();
    Ok(hits as f64 / k as f64)
}

/// Compute the Average Precision of `target` over a ranked sequence.
///
/// For every 1-indexed rank position `p` where `ranked[p] == target`, the
/// precision over the first `p` entries is accumulated; the sum is divided
/// by the number of occurrences of `target`. The result is in
/// `[0.0, 1.0]` and equals `1.0` exactly when every occurrence of `target`
/// occupies the top ranks contiguously.
///
/// The metric rewards placing target-labeled items early in the ranking
/// and is insensitive to how non-target items are interspersed below the
/// last hit. Identical inputs always yield bit-identical output.
///
/// # Errors
///
/// Returns [`RankEvalError::InvalidParameter`] if `ranked` is empty, and
/// [`RankEvalError::NoPositiveInstances`] if `target` never occurs in
/// `ranked` — an undefined metric, deliberately not conflated with a valid
/// `0.0` result.
///
/// # Examples
///
/// ```
/// use rankeval_rust::metrics::ranking::average_precision;
///
/// // Hits at ranks 2 and 4: (1/2 + 2/4) / 2 = 0.5
/// assert_eq!(average_precision(&[0, 1, 0, 1, 0], 1).unwrap(), 0.5);
/// ```
pub fn average_precision(ranked: &[Label], target: Label) -> Result<f64> {
    validate_non_empty(ranked)?;

    let occurrences = ranked.iter().filter(|&&label| label == target).count();
    if occurrences == 0 {
        return Err(RankEvalError::no_positive_instances(target));
    }

    // Single pass: at the p-th rank holding the i-th hit, precision@p is
    // hits-so-far / p. Summing those terms matches evaluating
    // precision_at_k at every hit position.
    let mut hits = 0usize;
    let mut sum = 0.0;
    for (idx, &label) in ranked.iter().enumerate() {
        if label == target {
            hits += 1;
            sum += hits as f64 / (idx + 1) as f64;
        }
    }

    Ok(sum / occurrences as f64)
}

fn validate_non_empty(ranked: &[Label]) -> Result<()> {
    if ranked.is_empty() {
        return Err(RankEvalError::invalid_parameter(
            "ranked",
            "[]",
            "sequence must contain at least one element",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_at_k_basic() {
        let ranked = vec![1, 1, 0, 1, 0];
        assert_eq!(precision_at_k(&ranked, 1, 1).unwrap(), 1.0);
        assert_eq!(precision_at_k(&ranked, 1, 2).unwrap(), 1.0);
        assert_eq!(precision_at_k(&ranked, 1, 3).unwrap(), 2.0 / 3.0);
        assert_eq!(precision_at_k(&ranked, 1, 5).unwrap(), 3.0 / 5.0);
    }

    #[test]
    fn test_precision_at_full_length_equals_frequency() {
        let ranked = vec![0, 1, 2, 1, 1, 0];
        let p = precision_at_k(&ranked, 1, ranked.len()).unwrap();
        assert_eq!(p, 3.0 / 6.0);
    }

    #[test]
    fn test_precision_at_k_zero_is_rejected() {
        let ranked = vec![1, 0];
        let err = precision_at_k(&ranked, 1, 0).unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_precision_at_k_beyond_length_is_rejected() {
        let ranked = vec![1, 0];
        let err = precision_at_k(&ranked, 1, 3).unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_precision_empty_sequence_is_rejected() {
        let err = precision_at_k(&[], 1, 1).unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_average_precision_perfect_ranking() {
        // All targets contiguous at the front
        assert_eq!(average_precision(&[1, 1, 1, 0, 0], 1).unwrap(), 1.0);
        assert_eq!(average_precision(&[1, 1, 1], 1).unwrap(), 1.0);
        assert_eq!(average_precision(&[1, 0, 0], 1).unwrap(), 1.0);
    }

    #[test]
    fn test_average_precision_alternating() {
        // Hits at ranks 2 and 4: precision 0.5 at both
        assert_eq!(average_precision(&[0, 1, 0, 1, 0], 1).unwrap(), 0.5);
    }

    #[test]
    fn test_average_precision_split_hits() {
        // Hits at ranks 1 and 5: (1.0 + 0.4) / 2 = 0.7
        assert_eq!(average_precision(&[1, 0, 0, 0, 1], 1).unwrap(), 0.7);
    }

    #[test]
    fn test_average_precision_no_positives() {
        let err = average_precision(&[0, 0, 0], 1).unwrap_err();
        assert!(matches!(err, RankEvalError::NoPositiveInstances { label: 1 }));
    }

    #[test]
    fn test_average_precision_empty_sequence() {
        let err = average_precision(&[], 1).unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_average_precision_non_binary_labels() {
        // Target need not be 1; any equality-comparable code works
        let ranked = vec![7, 3, 7, 3];
        assert_eq!(average_precision(&ranked, 7).unwrap(), (1.0 + 2.0 / 3.0) / 2.0);
    }

    #[test]
    fn test_average_precision_matches_precision_sum() {
        let ranked = vec![0, 1, 1, 0, 1, 0, 0, 1];
        let hit_ranks = [2usize, 3, 5, 8];
        let expected: f64 = hit_ranks
            .iter()
            .map(|&p| precision_at_k(&ranked, 1, p).unwrap())
            .sum::<f64>()
            / hit_ranks.len() as f64;
        assert_eq!(average_precision(&ranked, 1).unwrap(), expected);
    }
}
