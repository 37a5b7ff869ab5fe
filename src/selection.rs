//! Fold-scoring helpers for model-selection loops.
//!
//! A cross-validation or hyperparameter-search framework evaluates one
//! scorer against many (fold, candidate) combinations. The helpers here
//! apply a [`Scorer`] across a batch of folds and summarize the per-fold
//! values; with the default `parallel` feature the folds are scored
//! concurrently, which is safe because every scorer invocation is a pure
//! computation over its own inputs.

use crate::core::{
    error::Result,
    types::{Label, Score},
};
use crate::metrics::scorer::Scorer;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// One evaluation fold: parallel true labels and predicted scores.
pub type Fold = (Array1<Label>, Array1<Score>);

/// Per-fold scores plus their summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldScores {
    /// Score of each fold, in input order.
    pub scores: Vec<f64>,
    /// Mean of the fold scores.
    pub mean: f64,
    /// Population standard deviation of the fold scores.
    pub std: f64,
}

impl FoldScores {
    /// Summarize a set of per-fold scores.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let n = scores.len() as f64;
        let mean = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / n
        };
        let std = if scores.is_empty() {
            0.0
        } else {
            let variance = scores.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n;
            variance.sqrt()
        };
        Self { scores, mean, std }
    }

    /// Number of folds.
    pub fn num_folds(&self) -> usize {
        self.scores.len()
    }
}

/// Apply one scorer to every fold and summarize the results.
///
/// The first fold that fails aborts the batch and its error is returned
/// unchanged; skip-or-penalize policies for unscorable folds belong to the
/// calling framework.
///
/// # Examples
///
/// ```rust
/// use rankeval_rust::metrics::scorer::ApScorer;
/// use rankeval_rust::selection::score_folds;
/// use ndarray::Array1;
///
/// # fn example() -> rankeval_rust::Result<()> {
/// let folds = vec![
///     (Array1::from_vec(vec![1, 0]), Array1::from_vec(vec![0.9, 0.1])),
///     (Array1::from_vec(vec![0, 1]), Array1::from_vec(vec![0.9, 0.1])),
/// ];
///
/// let summary = score_folds(&ApScorer::default(), &folds)?;
/// assert_eq!(summary.scores, vec![1.0, 0.5]);
/// assert_eq!(summary.mean, 0.75);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "parallel")]
pub fn score_folds<S: Scorer + Sync>(scorer: &S, folds: &[Fold]) -> Result<FoldScores> {
    use rayon::prelude::*;

    let scores = folds
        .par_iter()
        .map(|(y_true, y_scores)| scorer.score(&y_true.view(), &y_scores.view()))
        .collect::<Result<Vec<f64>>>()?;

    log::debug!(
        "scored {} folds with {}",
        scores.len(),
        scorer.name()
    );
    Ok(FoldScores::from_scores(scores))
}

/// Apply one scorer to every fold and summarize the results.
///
/// Serial fallback used when the `parallel` feature is disabled; behavior
/// is identical to the parallel version.
#[cfg(not(feature = "parallel"))]
pub fn score_folds<S: Scorer + Sync>(scorer: &S, folds: &[Fold]) -> Result<FoldScores> {
    let scores = folds
        .iter()
        .map(|(y_true, y_scores)| scorer.score(&y_true.view(), &y_scores.view()))
        .collect::<Result<Vec<f64>>>()?;

    log::debug!(
        "scored {} folds with {}",
        scores.len(),
        scorer.name()
    );
    Ok(FoldScores::from_scores(scores))
}
