//! Core infrastructure for rankeval-rust.
//!
//! Fundamental types, constants, and error handling shared by every
//! metric computation in the crate.

pub mod constants;
pub mod error;
pub mod types;

pub use constants::{DEFAULT_POSITIVE_LABEL, RANKEVAL_RUST_VERSION};
pub use error::{RankEvalError, Result};
pub use types::{Label, Rank, Score};
