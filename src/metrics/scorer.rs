//! Scorers: the `(y_true, y_scores) -> scalar` contract for model selection.
//!
//! A scorer takes a sequence of true labels and a parallel sequence of
//! predicted scores and reduces them to a single quality value that a
//! model-selection framework can use to rank candidate models. Any type
//! implementing [`Scorer`] satisfies the contract; no base type is
//! required. [`ApScorer`] is the built-in rank-then-score adapter that
//! orders predictions by descending score and measures the resulting
//! ranking with Average Precision.

use crate::core::{
    constants::DEFAULT_POSITIVE_LABEL,
    error::{RankEvalError, Result},
    types::{Label, Score},
};
use crate::metrics::ranking::average_precision;
use crate::metrics::utils;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether a metric improves by decreasing or increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricDirection {
    /// Lower values indicate a better model
    Minimize,
    /// Higher values indicate a better model
    Maximize,
}

impl Default for MetricDirection {
    fn default() -> Self {
        MetricDirection::Maximize
    }
}

/// Scoring contract consumed by model-selection frameworks.
///
/// Implementations must be pure: no shared mutable state, no side effects,
/// identical inputs always producing identical output. A scorer is
/// routinely invoked once per fold and per candidate hyperparameter set,
/// possibly from many threads at once.
pub trait Scorer {
    /// Name under which the scorer is registered and reported.
    fn name(&self) -> &str;

    /// Whether the framework should minimize or maximize this score.
    fn direction(&self) -> MetricDirection;

    /// Reduce parallel true-label and predicted-score sequences to one value.
    ///
    /// Position `i` of `y_true` corresponds to position `i` of `y_scores`.
    fn score(&self, y_true: &ArrayView1<'_, Label>, y_scores: &ArrayView1<'_, Score>)
        -> Result<f64>;
}

/// Average Precision scorer over raw prediction scores.
///
/// Orders the predictions by strictly descending score (ties keep their
/// original input order, so the result is reproducible across runs),
/// applies that permutation to the true labels, and computes the Average
/// Precision of [`positive_label`](ApScorer::positive_label) over the
/// resulting ranking.
///
/// # Examples
///
/// ```rust
/// use rankeval_rust::metrics::scorer::{ApScorer, Scorer};
/// use ndarray::Array1;
///
/// # fn example() -> rankeval_rust::Result<()> {
/// let y_true = Array1::from_vec(vec![1, 0, 1, 0, 0]);
/// let y_scores = Array1::from_vec(vec![0.9, 0.8, 0.7, 0.2, 0.1]);
///
/// // Ranked labels: [1, 0, 1, 0, 0]; hits at ranks 1 and 3
/// let ap = ApScorer::default().score(&y_true.view(), &y_scores.view())?;
/// assert_eq!(ap, (1.0 + 2.0 / 3.0) / 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApScorer {
    /// Label treated as the positive class.
    pub positive_label: Label,
}

impl ApScorer {
    /// Create a scorer using [`DEFAULT_POSITIVE_LABEL`] as the positive class.
    pub fn new() -> Self {
        Self {
            positive_label: DEFAULT_POSITIVE_LABEL,
        }
    }

    /// Set the label treated as the positive class.
    pub fn with_positive_label(mut self, label: Label) -> Self {
        self.positive_label = label;
        self
    }

    fn validate_inputs(
        &self,
        y_true: &ArrayView1<'_, Label>,
        y_scores: &ArrayView1<'_, Score>,
    ) -> Result<()> {
        if y_true.len() != y_scores.len() {
            return Err(RankEvalError::dimension_mismatch(
                format!("y_true: {}", y_true.len()),
                format!("y_scores: {}", y_scores.len()),
            ));
        }

        if y_true.is_empty() {
            return Err(RankEvalError::invalid_parameter(
                "y_true",
                "[]",
                "scoring requires at least one sample",
            ));
        }

        Ok(())
    }
}

impl Default for ApScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for ApScorer {
    fn name(&self) -> &str {
        "average_precision"
    }

    fn direction(&self) -> MetricDirection {
        MetricDirection::Maximize
    }

    fn score(
        &self,
        y_true: &ArrayView1<'_, Label>,
        y_scores: &ArrayView1<'_, Score>,
    ) -> Result<f64> {
        self.validate_inputs(y_true, y_scores)?;

        // Copy out of the (possibly non-contiguous) views once;
        // everything below works on slices.
        let scores: Vec<Score> = y_scores.iter().copied().collect();
        if let Some(idx) = utils::first_non_finite(&scores) {
            return Err(RankEvalError::invalid_parameter(
                "y_scores",
                format!("{} at index {}", scores[idx], idx),
                "predicted scores must be finite",
            ));
        }

        let order = utils::argsort_descending(&scores);
        let ranked: Vec<Label> = order.iter().map(|&i| y_true[i]).collect();

        average_precision(&ranked, self.positive_label)
    }
}

/// Scorer built from a plain function or closure.
///
/// Mirrors the "make a scorer from a function" adapter pattern: any
/// callable matching the two-argument scorer shape becomes a registrable
/// [`Scorer`] without further ceremony.
pub struct FnScorer<F>
where
    F: Fn(&ArrayView1<'_, Label>, &ArrayView1<'_, Score>) -> Result<f64>,
{
    name: String,
    direction: MetricDirection,
    func: F,
}

impl<F> FnScorer<F>
where
    F: Fn(&ArrayView1<'_, Label>, &ArrayView1<'_, Score>) -> Result<f64>,
{
    /// Wrap `func` as a named scorer.
    pub fn new<S: Into<String>>(name: S, direction: MetricDirection, func: F) -> Self {
        Self {
            name: name.into(),
            direction,
            func,
        }
    }
}

impl<F> fmt::Debug for FnScorer<F>
where
    F: Fn(&ArrayView1<'_, Label>, &ArrayView1<'_, Score>) -> Result<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScorer")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<F> Scorer for FnScorer<F>
where
    F: Fn(&ArrayView1<'_, Label>, &ArrayView1<'_, Score>) -> Result<f64>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn direction(&self) -> MetricDirection {
        self.direction
    }

    fn score(
        &self,
        y_true: &ArrayView1<'_, Label>,
        y_scores: &ArrayView1<'_, Score>,
    ) -> Result<f64> {
        (self.func)(y_true, y_scores)
    }
}

/// Wrap a function as a [`Scorer`].
///
/// ```rust
/// use rankeval_rust::metrics::scorer::{make_scorer, MetricDirection, Scorer};
/// use ndarray::Array1;
///
/// # fn example() -> rankeval_rust::Result<()> {
/// let hit_rate = make_scorer("hit_rate", MetricDirection::Maximize, |y_true, _| {
///     let hits = y_true.iter().filter(|&&l| l == 1).count();
///     Ok(hits as f64 / y_true.len() as f64)
/// });
///
/// let y_true = Array1::from_vec(vec![1, 0, 1, 1]);
/// let y_scores = Array1::from_vec(vec![0.4, 0.3, 0.2, 0.1]);
/// assert_eq!(hit_rate.score(&y_true.view(), &y_scores.view())?, 0.75);
/// # Ok(())
/// # }
/// ```
pub fn make_scorer<S, F>(name: S, direction: MetricDirection, func: F) -> FnScorer<F>
where
    S: Into<String>,
    F: Fn(&ArrayView1<'_, Label>, &ArrayView1<'_, Score>) -> Result<f64>,
{
    FnScorer::new(name, direction, func)
}

/// Registry of named scorers a selection framework can look up.
#[derive(Default)]
pub struct ScorerRegistry {
    scorers: HashMap<String, Box<dyn Scorer + Send + Sync>>,
}

impl ScorerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in scorers pre-registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ApScorer::default()));
        registry
    }

    /// Register a scorer under its own name.
    pub fn register(&mut self, scorer: Box<dyn Scorer + Send + Sync>) {
        let name = scorer.name().to_string();
        if self.scorers.insert(name.clone(), scorer).is_some() {
            log::warn!("Replacing previously registered scorer: {}", name);
        }
    }

    /// Look up a scorer by name.
    pub fn get(&self, name: &str) -> Option<&(dyn Scorer + Send + Sync)> {
        self.scorers.get(name).map(|s| s.as_ref())
    }

    /// Registered scorer names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scorers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered scorers.
    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }
}

impl fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScorerRegistry")
            .field("scorers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_ap_scorer_ranks_before_scoring() {
        // Scores are unordered on input; the adapter must sort first
        let y_true = Array1::from_vec(vec![0, 1, 1, 0]);
        let y_scores = Array1::from_vec(vec![0.1, 0.9, 0.8, 0.3]);

        let ap = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap();
        assert_eq!(ap, 1.0);
    }

    #[test]
    fn test_ap_scorer_tie_break_is_input_order() {
        // Both samples score 0.5; the first input entry must rank first
        let y_true = Array1::from_vec(vec![1, 0]);
        let y_scores = Array1::from_vec(vec![0.5, 0.5]);
        let ap = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap();
        assert_eq!(ap, 1.0);

        let y_true = Array1::from_vec(vec![0, 1]);
        let ap = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap();
        assert_eq!(ap, 0.5);
    }

    #[test]
    fn test_ap_scorer_length_mismatch() {
        let y_true = Array1::from_vec(vec![1, 0, 1]);
        let y_scores = Array1::from_vec(vec![0.9, 0.8]);
        let err = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap_err();
        assert_eq!(err.category(), "dimension_mismatch");
    }

    #[test]
    fn test_ap_scorer_empty_inputs() {
        let y_true = Array1::from_vec(Vec::<Label>::new());
        let y_scores = Array1::from_vec(Vec::<Score>::new());
        let err = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_ap_scorer_rejects_nan_scores() {
        let y_true = Array1::from_vec(vec![1, 0]);
        let y_scores = Array1::from_vec(vec![0.9, f64::NAN]);
        let err = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap_err();
        assert_eq!(err.category(), "invalid_parameter");
    }

    #[test]
    fn test_ap_scorer_propagates_no_positive_instances() {
        let y_true = Array1::from_vec(vec![0, 0, 0]);
        let y_scores = Array1::from_vec(vec![0.3, 0.2, 0.1]);
        let err = ApScorer::default()
            .score(&y_true.view(), &y_scores.view())
            .unwrap_err();
        assert!(matches!(err, RankEvalError::NoPositiveInstances { label: 1 }));
    }

    #[test]
    fn test_ap_scorer_positive_label_override() {
        let y_true = Array1::from_vec(vec![2, 5, 2]);
        let y_scores = Array1::from_vec(vec![0.9, 0.5, 0.1]);

        let scorer = ApScorer::new().with_positive_label(5);
        let ap = scorer.score(&y_true.view(), &y_scores.view()).unwrap();
        assert_eq!(ap, 0.5);
    }

    #[test]
    fn test_ap_scorer_name_and_direction() {
        let scorer = ApScorer::default();
        assert_eq!(scorer.name(), "average_precision");
        assert_eq!(scorer.direction(), MetricDirection::Maximize);
    }

    #[test]
    fn test_fn_scorer() {
        let constant = make_scorer("constant", MetricDirection::Maximize, |_, _| Ok(0.25));
        let y_true = Array1::from_vec(vec![1]);
        let y_scores = Array1::from_vec(vec![0.5]);
        assert_eq!(constant.score(&y_true.view(), &y_scores.view()).unwrap(), 0.25);
        assert_eq!(constant.name(), "constant");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ScorerRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["average_precision"]);

        let scorer = registry.get("average_precision").unwrap();
        let y_true = Array1::from_vec(vec![1, 0]);
        let y_scores = Array1::from_vec(vec![0.9, 0.1]);
        assert_eq!(scorer.score(&y_true.view(), &y_scores.view()).unwrap(), 1.0);
    }

    #[test]
    fn test_registry_register_and_lookup() {
        let mut registry = ScorerRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(make_scorer(
            "always_zero",
            MetricDirection::Minimize,
            |_, _| Ok(0.0),
        )));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("always_zero").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_scorer_serde_roundtrip() {
        let scorer = ApScorer::new().with_positive_label(3);
        let serialized = serde_json::to_string(&scorer).unwrap();
        let deserialized: ApScorer = serde_json::from_str(&serialized).unwrap();
        assert_eq!(scorer, deserialized);
    }
}
