//! Library-wide constants.

use crate::core::types::Label;

/// Version of the rankeval-rust library.
pub const RANKEVAL_RUST_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default positive class code for Average Precision.
///
/// Binary-classification label encodings conventionally use `1` for the
/// positive class. Scorers accept any other label via
/// [`ApScorer::with_positive_label`](crate::metrics::scorer::ApScorer::with_positive_label).
pub const DEFAULT_POSITIVE_LABEL: Label = 1;
