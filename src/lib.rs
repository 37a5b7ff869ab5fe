//! # rankeval-rust
//!
//! Ranking-quality evaluation metrics for model selection, written in pure
//! Rust. Given a ranked list of predictions and their true labels, the
//! crate computes precision-at-k and Average Precision (AP), and exposes a
//! rank-then-score adapter that turns an arbitrary prediction-score array
//! into an AP value usable as a pluggable scoring function inside a
//! cross-validation or hyperparameter-search loop.
//!
//! ## Features
//!
//! - **Deterministic**: stable descending sort with input-order tie-breaks,
//!   NaN scores rejected up front; identical inputs always produce
//!   bit-identical results.
//! - **Typed errors**: an absent positive class is reported as its own
//!   error instead of a misleading `0.0`, and out-of-range parameters are
//!   rejected rather than clamped.
//! - **Pluggable scorers**: any `(y_true, y_scores) -> scalar` callable
//!   satisfies the [`Scorer`] contract and can be registered for a
//!   selection framework to look up by name.
//! - **Parallel fold scoring**: the computations are pure and stateless,
//!   so batches of folds are scored concurrently with Rayon under the
//!   default `parallel` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use rankeval_rust::{ApScorer, Scorer};
//! use ndarray::Array1;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! let y_true = Array1::from_vec(vec![1, 0, 0, 0, 1]);
//! let y_scores = Array1::from_vec(vec![0.95, 0.80, 0.75, 0.60, 0.55]);
//!
//! let ap = ApScorer::default().score(&y_true.view(), &y_scores.view())?;
//! assert_eq!(ap, 0.7);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - [`core`]: fundamental types, constants, and error handling
//! - [`metrics`]: ranking metrics, the scorer adapter, and the
//!   confusion-matrix builder whose output external plotting tools render
//! - [`selection`]: fold-scoring helpers for model-selection loops
//! - [`vocab`]: static semantic-type vocabulary for human-readable labels

#![doc(html_root_url = "https://docs.rs/rankeval-rust/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Metrics module: ranking metrics, scorers, confusion matrix
pub mod metrics;

// Model-selection helpers
pub mod selection;

// Static vocabulary data
pub mod vocab;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::DEFAULT_POSITIVE_LABEL,
    error::{RankEvalError, Result},
    types::{Label, Rank, Score},
};

// Re-export metrics functionality
pub use metrics::{
    classification::{Colormap, ConfusionMatrix, MatrixDisplayConfig},
    ranking::{average_precision, precision_at_k},
    scorer::{make_scorer, ApScorer, FnScorer, MetricDirection, Scorer, ScorerRegistry},
};

// Re-export selection functionality
pub use selection::{score_folds, Fold, FoldScores};

// Version information
pub use crate::core::constants::RANKEVAL_RUST_VERSION as VERSION;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_reexports() {
        let ranked = vec![1, 1, 0];
        assert_eq!(average_precision(&ranked, DEFAULT_POSITIVE_LABEL).unwrap(), 1.0);
        assert_eq!(precision_at_k(&ranked, 1, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_scorer_through_registry() {
        let registry = ScorerRegistry::with_defaults();
        let scorer = registry.get("average_precision").unwrap();
        assert_eq!(scorer.direction(), MetricDirection::Maximize);

        let y_true = Array1::from_vec(vec![0, 1]);
        let y_scores = Array1::from_vec(vec![0.2, 0.8]);
        assert_eq!(scorer.score(&y_true.view(), &y_scores.view()).unwrap(), 1.0);
    }
}
