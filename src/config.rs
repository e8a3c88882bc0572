//! Tunable parameters for the dispatcher.
//!
//! Defaults are plain constants; a `SimilarityConfig` is an immutable value
//! handed to [`similarity_with_config`](crate::similarity_with_config) at the
//! call site. There is no process-wide configuration.

use crate::algorithms::freq::DEFAULT_K;
use crate::algorithms::jaro::{DEFAULT_PREFIX_SCALE, MAX_PREFIX_SCALE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters consumed by the parameterized algorithms.
///
/// Deserializing fills missing fields with their defaults, so an empty JSON
/// object `{}` yields `SimilarityConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Jaro-Winkler prefix scale (0.0 to 0.25)
    pub prefix_scale: f64,
    /// Number of most frequent characters compared by the MostFreqK metrics
    pub k: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            prefix_scale: DEFAULT_PREFIX_SCALE,
            k: DEFAULT_K,
        }
    }
}

impl SimilarityConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix_scale(mut self, prefix_scale: f64) -> Self {
        self.prefix_scale = prefix_scale;
        self
    }

    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Reject values the metrics would otherwise clamp or degenerate on.
    pub fn validate(&self) -> Result<()> {
        if !self.prefix_scale.is_finite() || !(0.0..=MAX_PREFIX_SCALE).contains(&self.prefix_scale) {
            return Err(Error::InvalidPrefixScale(self.prefix_scale));
        }
        if self.k == 0 {
            return Err(Error::InvalidK);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimilarityConfig::default();
        assert_eq!(config.prefix_scale, 0.1);
        assert_eq!(config.k, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            SimilarityConfig::new().with_prefix_scale(0.3).validate(),
            Err(Error::InvalidPrefixScale(0.3))
        );
        assert!(SimilarityConfig::new().with_prefix_scale(f64::INFINITY).validate().is_err());
        assert_eq!(SimilarityConfig::new().with_k(0).validate(), Err(Error::InvalidK));
        assert!(SimilarityConfig::new().with_k(5).with_prefix_scale(0.25).validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SimilarityConfig::new().with_k(3).with_prefix_scale(0.2);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimilarityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let config: SimilarityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimilarityConfig::default());

        let config: SimilarityConfig = serde_json::from_str(r#"{"k": 4}"#).unwrap();
        assert_eq!(config.k, 4);
        assert_eq!(config.prefix_scale, 0.1);
    }
}
