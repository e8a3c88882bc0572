//! Error types for configuration and batch entry points.
//!
//! Metric functions never fail: empty inputs have fixed scores and Hamming
//! length mismatches are reported through `Option`. Errors only arise when a
//! caller hands in an unusable parameter.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Algorithm name did not match any known selector
    #[error("unknown similarity algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Jaro-Winkler prefix scale outside [0.0, 0.25]
    #[error("prefix_scale must be a finite number in [0.0, 0.25], got {0}")]
    InvalidPrefixScale(f64),

    /// Similarity threshold outside [0.0, 1.0]
    #[error("min_similarity must be a finite number in [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// MostFreqK needs at least one character per vector
    #[error("k must be at least 1")]
    InvalidK,
}

/// Check that a similarity threshold is a finite value in [0.0, 1.0].
pub fn validate_threshold(value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold(value))
    }
}
