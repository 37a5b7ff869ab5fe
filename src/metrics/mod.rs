//! Evaluation metrics for ranked predictions.
//!
//! This module provides ranking-quality metrics (precision-at-k, Average
//! Precision), the scorer adapter that turns raw prediction scores into a
//! ranking before measuring it, and a confusion-matrix builder whose output
//! external plotting tools render.
//!
//! # Examples
//!
//! ## Metrics over an already-ranked sequence
//!
//! ```rust
//! use rankeval_rust::metrics::ranking::{average_precision, precision_at_k};
//!
//! # fn example() -> rankeval_rust::Result<()> {
//! let ranked = vec![1, 0, 0, 0, 1];
//! assert_eq!(precision_at_k(&ranked, 1, 1)?, 1.0);
//! assert_eq!(average_precision(&ranked, 1)?, 0.7);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scoring raw predictions
//!
//! ```rust
//! use rankeval_rust::metrics::scorer::{ApScorer, Scorer};
//! use ndarray::Array1;
//!
//! # fn example() -> rankeval_rust::Result<()> {
//! let y_true = Array1::from_vec(vec![0, 1, 1, 0]);
//! let y_scores = Array1::from_vec(vec![0.1, 0.9, 0.8, 0.3]);
//!
//! let scorer = ApScorer::default();
//! let ap = scorer.score(&y_true.view(), &y_scores.view())?;
//! assert_eq!(ap, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod classification;
pub mod ranking;
pub mod scorer;

// Re-export main types for convenience
pub use classification::{Colormap, ConfusionMatrix, MatrixDisplayConfig};
pub use ranking::{average_precision, precision_at_k};
pub use scorer::{make_scorer, ApScorer, FnScorer, MetricDirection, Scorer, ScorerRegistry};

/// Utility functions shared by the metric implementations.
pub mod utils {
    use num_traits::Float;

    /// Indices of `scores` ordered by strictly descending score value.
    ///
    /// The sort is stable: tied scores keep their original input order, so
    /// repeated calls over identical inputs produce identical permutations.
    /// Callers must reject NaN before sorting; an incomparable pair falls
    /// back to "equal" and would otherwise leave the order comparator-
    /// dependent.
    pub fn argsort_descending<S: Float>(scores: &[S]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    /// Index of the first non-finite score, if any.
    pub fn first_non_finite<S: Float>(scores: &[S]) -> Option<usize> {
        scores.iter().position(|s| !s.is_finite())
    }

}
