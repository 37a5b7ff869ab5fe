//! Core data types for rankeval-rust.
//!
//! This module defines the fundamental data types shared by all metric
//! computations, using simple aliases so call sites read in domain terms.

/// Class code for ground-truth and predicted labels.
/// Equality-comparable integer, matching the usual encoded-label inputs.
pub type Label = i32;

/// Predicted confidence score used to rank predictions.
/// 64-bit float so rank positions and averages share one precision.
pub type Score = f64;

/// 1-indexed position of an item within a ranked sequence.
pub type Rank = usize;
