//! Error handling and error types for rankeval-rust.
//!
//! This module provides error handling using Rust's Result type system,
//! ensuring clear error propagation throughout the metric computations.
//! All errors are raised synchronously at the point of detection; the
//! computations are pure and deterministic, so there are no partial
//! results and nothing to retry.

use thiserror::Error;

/// Main error type for the rankeval library.
///
/// This enum covers all error conditions that can occur while validating
/// inputs and computing ranking metrics.
#[derive(Error, Debug)]
pub enum RankEvalError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// The positive label never occurs in the sequence being scored.
    ///
    /// Distinct from a numeric `0.0` result: a positive class that is
    /// present but ranked last yields a valid near-zero Average Precision,
    /// while an absent positive class leaves the metric undefined.
    #[error("No positive instances: label {label} does not occur in the sequence")]
    NoPositiveInstances { label: i32 },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using RankEvalError
pub type Result<T> = std::result::Result<T, RankEvalError>;

/// Utility functions for error handling
impl RankEvalError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        RankEvalError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        RankEvalError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        RankEvalError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a no-positive-instances error for the given label
    pub fn no_positive_instances(label: i32) -> Self {
        RankEvalError::NoPositiveInstances { label }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        RankEvalError::Internal {
            message: message.into(),
        }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            RankEvalError::Config { .. } => "config",
            RankEvalError::InvalidParameter { .. } => "invalid_parameter",
            RankEvalError::DimensionMismatch { .. } => "dimension_mismatch",
            RankEvalError::NoPositiveInstances { .. } => "no_positive_instances",
            RankEvalError::Internal { .. } => "internal",
        }
    }
}

/// Convenience macro for input validation
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
