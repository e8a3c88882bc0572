//! Algorithm selection and the combined ensemble
//!
//! [`SimilarityAlgorithm`] names every metric the dispatcher can route to.
//! [`similarity`] matches on it exhaustively; no trait objects are involved.

use super::damerau::damerau_levenshtein_similarity;
use super::freq::{most_freq_k_similarity, normalized_most_freq_k_similarity};
use super::hamming::hamming_similarity;
use super::jaro::{jaro_winkler_similarity, jaro_winkler_similarity_with_scale};
use super::levenshtein::levenshtein_similarity;
use super::token::{token_similarity, token_sort_similarity};
use super::Similarity;
use crate::config::SimilarityConfig;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm for computing string similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityAlgorithm {
    /// Levenshtein distance normalized by the longer length.
    /// Good general-purpose choice for insertions, deletions and substitutions.
    Levenshtein,
    /// OSA Damerau-Levenshtein; also forgives adjacent swaps
    DamerauLevenshtein,
    /// Jaro-Winkler; favours short strings with a shared prefix
    JaroWinkler,
    /// Best of token Jaccard and token-sort similarity
    TokenBased,
    /// Best of Levenshtein, Damerau-Levenshtein, Jaro-Winkler and token-sort
    Combined,
    /// Hamming similarity, 0.0 when lengths differ
    Hamming,
    /// MostFreqK similarity
    MostFreqK,
    /// Cosine-normalized MostFreqK similarity
    NormalizedMostFreqK,
}

impl SimilarityAlgorithm {
    /// Every selector, in declaration order.
    pub const ALL: [SimilarityAlgorithm; 8] = [
        SimilarityAlgorithm::Levenshtein,
        SimilarityAlgorithm::DamerauLevenshtein,
        SimilarityAlgorithm::JaroWinkler,
        SimilarityAlgorithm::TokenBased,
        SimilarityAlgorithm::Combined,
        SimilarityAlgorithm::Hamming,
        SimilarityAlgorithm::MostFreqK,
        SimilarityAlgorithm::NormalizedMostFreqK,
    ];

    /// Canonical snake_case name, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::Levenshtein => "levenshtein",
            SimilarityAlgorithm::DamerauLevenshtein => "damerau_levenshtein",
            SimilarityAlgorithm::JaroWinkler => "jaro_winkler",
            SimilarityAlgorithm::TokenBased => "token_based",
            SimilarityAlgorithm::Combined => "combined",
            SimilarityAlgorithm::Hamming => "hamming",
            SimilarityAlgorithm::MostFreqK => "most_freq_k",
            SimilarityAlgorithm::NormalizedMostFreqK => "normalized_most_freq_k",
        }
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses snake_case, kebab-case and camelCase spellings, ignoring case.
impl FromStr for SimilarityAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "levenshtein" => Ok(SimilarityAlgorithm::Levenshtein),
            "dameraulevenshtein" => Ok(SimilarityAlgorithm::DamerauLevenshtein),
            "jarowinkler" => Ok(SimilarityAlgorithm::JaroWinkler),
            "tokenbased" => Ok(SimilarityAlgorithm::TokenBased),
            "combined" => Ok(SimilarityAlgorithm::Combined),
            "hamming" => Ok(SimilarityAlgorithm::Hamming),
            "mostfreqk" => Ok(SimilarityAlgorithm::MostFreqK),
            "normalizedmostfreqk" => Ok(SimilarityAlgorithm::NormalizedMostFreqK),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Selectors are usable wherever a `Similarity` metric is expected.
impl Similarity for SimilarityAlgorithm {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity(a, b, *self)
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

/// Best score among Levenshtein, Damerau-Levenshtein, Jaro-Winkler and
/// token-sort similarity.
///
/// The ensemble is fixed: Hamming, token Jaccard and the MostFreqK metrics
/// never take part.
#[must_use]
pub fn combined_similarity(a: &str, b: &str) -> f64 {
    combined_similarity_with_scale(a, b, super::jaro::DEFAULT_PREFIX_SCALE)
}

fn combined_similarity_with_scale(a: &str, b: &str, prefix_scale: f64) -> f64 {
    [
        levenshtein_similarity(a, b),
        damerau_levenshtein_similarity(a, b),
        jaro_winkler_similarity_with_scale(a, b, prefix_scale),
        token_sort_similarity(a, b),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Compute similarity using the specified algorithm with default parameters
/// (prefix scale 0.1, k = 2).
///
/// # Example
/// ```
/// use strsim_metrics::{similarity, levenshtein_similarity, SimilarityAlgorithm};
///
/// assert_eq!(
///     similarity("kitten", "sitting", SimilarityAlgorithm::Levenshtein),
///     levenshtein_similarity("kitten", "sitting"),
/// );
/// // Hamming on unequal lengths falls back to 0.0
/// assert_eq!(similarity("abc", "abcd", SimilarityAlgorithm::Hamming), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str, algorithm: SimilarityAlgorithm) -> f64 {
    match algorithm {
        SimilarityAlgorithm::Levenshtein => levenshtein_similarity(a, b),
        SimilarityAlgorithm::DamerauLevenshtein => damerau_levenshtein_similarity(a, b),
        SimilarityAlgorithm::JaroWinkler => jaro_winkler_similarity(a, b),
        SimilarityAlgorithm::TokenBased => token_similarity(a, b).max(token_sort_similarity(a, b)),
        SimilarityAlgorithm::Combined => combined_similarity(a, b),
        SimilarityAlgorithm::Hamming => hamming_similarity(a, b).unwrap_or(0.0),
        SimilarityAlgorithm::MostFreqK => most_freq_k_similarity(a, b, super::freq::DEFAULT_K),
        SimilarityAlgorithm::NormalizedMostFreqK => {
            normalized_most_freq_k_similarity(a, b, super::freq::DEFAULT_K)
        }
    }
}

/// Like [`similarity`], but with the prefix scale and `k` taken from `config`.
///
/// The config's prefix scale also applies to the Jaro-Winkler member of the
/// combined ensemble.
#[must_use]
pub fn similarity_with_config(
    a: &str,
    b: &str,
    algorithm: SimilarityAlgorithm,
    config: &SimilarityConfig,
) -> f64 {
    match algorithm {
        SimilarityAlgorithm::JaroWinkler => {
            jaro_winkler_similarity_with_scale(a, b, config.prefix_scale)
        }
        SimilarityAlgorithm::Combined => combined_similarity_with_scale(a, b, config.prefix_scale),
        SimilarityAlgorithm::MostFreqK => most_freq_k_similarity(a, b, config.k),
        SimilarityAlgorithm::NormalizedMostFreqK => {
            normalized_most_freq_k_similarity(a, b, config.k)
        }
        SimilarityAlgorithm::Levenshtein
        | SimilarityAlgorithm::DamerauLevenshtein
        | SimilarityAlgorithm::TokenBased
        | SimilarityAlgorithm::Hamming => similarity(a, b, algorithm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_standalone() {
        assert_eq!(
            similarity("kitten", "sitting", SimilarityAlgorithm::Levenshtein),
            levenshtein_similarity("kitten", "sitting")
        );
        assert_eq!(
            similarity("CA", "AC", SimilarityAlgorithm::DamerauLevenshtein),
            damerau_levenshtein_similarity("CA", "AC")
        );
        assert_eq!(
            similarity("MARTHA", "MARHTA", SimilarityAlgorithm::JaroWinkler),
            jaro_winkler_similarity("MARTHA", "MARHTA")
        );
        assert_eq!(
            similarity("karolin", "kathrin", SimilarityAlgorithm::Hamming),
            hamming_similarity("karolin", "kathrin").unwrap()
        );
    }

    #[test]
    fn test_token_based_takes_best_of_both() {
        // Jaccard 0.0, token-sort > 0
        let a = "hello world";
        let b = "hallo wörld";
        let score = similarity(a, b, SimilarityAlgorithm::TokenBased);
        assert_eq!(token_similarity(a, b), 0.0);
        assert_eq!(score, token_sort_similarity(a, b));
        assert!(score > 0.0);
    }

    #[test]
    fn test_hamming_fallback() {
        assert_eq!(similarity("abc", "abcd", SimilarityAlgorithm::Hamming), 0.0);
        assert_eq!(similarity("", "", SimilarityAlgorithm::Hamming), 1.0);
    }

    #[test]
    fn test_combined_similarity() {
        assert_eq!(combined_similarity("", ""), 1.0);
        assert_eq!(combined_similarity("abc", "abc"), 1.0);
        // Word order only: token-sort wins
        assert_eq!(combined_similarity("world hello", "hello world"), 1.0);
        let ca = combined_similarity("CA", "AC");
        assert!(ca >= damerau_levenshtein_similarity("CA", "AC"));
        assert!(ca >= jaro_winkler_similarity("CA", "AC"));
    }

    #[test]
    fn test_parse_algorithm_names() {
        for algorithm in SimilarityAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<SimilarityAlgorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.as_str());
        }
        assert_eq!(
            "damerauLevenshtein".parse::<SimilarityAlgorithm>(),
            Ok(SimilarityAlgorithm::DamerauLevenshtein)
        );
        assert_eq!(
            "Normalized-Most-Freq-K".parse::<SimilarityAlgorithm>(),
            Ok(SimilarityAlgorithm::NormalizedMostFreqK)
        );
        assert_eq!(
            "soundex".parse::<SimilarityAlgorithm>(),
            Err(Error::UnknownAlgorithm("soundex".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SimilarityAlgorithm::MostFreqK).unwrap();
        assert_eq!(json, "\"most_freq_k\"");
        let back: SimilarityAlgorithm = serde_json::from_str("\"jaro_winkler\"").unwrap();
        assert_eq!(back, SimilarityAlgorithm::JaroWinkler);
    }

    #[test]
    fn test_similarity_with_config() {
        let defaults = SimilarityConfig::default();
        for algorithm in SimilarityAlgorithm::ALL {
            assert_eq!(
                similarity_with_config("research", "seeking", algorithm, &defaults),
                similarity("research", "seeking", algorithm)
            );
        }

        let config = SimilarityConfig::new().with_k(3).with_prefix_scale(0.2);
        assert_eq!(
            similarity_with_config("aabbc", "abbcc", SimilarityAlgorithm::MostFreqK, &config),
            most_freq_k_similarity("aabbc", "abbcc", 3)
        );
        assert_eq!(
            similarity_with_config("MARTHA", "MARHTA", SimilarityAlgorithm::JaroWinkler, &config),
            jaro_winkler_similarity_with_scale("MARTHA", "MARHTA", 0.2)
        );
    }

    #[test]
    fn test_algorithm_as_metric() {
        let metric: &dyn Similarity = &SimilarityAlgorithm::Levenshtein;
        assert_eq!(metric.similarity("kitten", "sitting"), levenshtein_similarity("kitten", "sitting"));
        assert_eq!(metric.name(), "levenshtein");
    }
}
