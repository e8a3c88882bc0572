//! strsim-metrics - String similarity metrics
//!
//! Distance and similarity measures between two strings, all operating on
//! Unicode scalar values (`char`).
//!
//! # Features
//! - Edit distances: Levenshtein and OSA Damerau-Levenshtein
//! - Jaro and Jaro-Winkler similarity
//! - Token-based similarity (Jaccard over word sets, sorted-token Levenshtein)
//! - Hamming distance for equal-length strings
//! - MostFreqK character-frequency distance and its cosine-normalized variant
//! - A [`SimilarityAlgorithm`] dispatcher and a combined ensemble
//! - Parallel batch scoring and near-duplicate grouping
//!
//! Every similarity lies in [0.0, 1.0] and every function is pure, so all of
//! them can be called concurrently.
//!
//! # Example
//! ```
//! use strsim_metrics::{
//!     damerau_levenshtein, jaro_winkler_similarity, levenshtein, similarity,
//!     token_sort_similarity, SimilarityAlgorithm,
//! };
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(damerau_levenshtein("CA", "AC"), 1);
//! assert!((jaro_winkler_similarity("MARTHA", "MARHTA") - 0.961).abs() < 0.001);
//! assert_eq!(token_sort_similarity("world hello", "hello world"), 1.0);
//! assert_eq!(similarity("abc", "abc", SimilarityAlgorithm::Combined), 1.0);
//! ```

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod dedup;
pub mod error;

pub use algorithms::{
    combined_similarity, damerau_levenshtein, damerau_levenshtein_similarity, hamming_distance,
    hamming_similarity, jaro_similarity, jaro_winkler_similarity,
    jaro_winkler_similarity_with_scale, levenshtein, levenshtein_similarity,
    most_freq_k_distance, most_freq_k_similarity, normalized_most_freq_k_similarity, similarity,
    similarity_with_config, token_similarity, token_sort_similarity, DamerauLevenshtein,
    EditDistance, FallibleEditDistance, Hamming, Jaro, JaroWinkler, Levenshtein, MostFreqK,
    NormalizedMostFreqK, Similarity, SimilarityAlgorithm, TokenJaccard, TokenSort,
};
pub use batch::MatchResult;
pub use config::SimilarityConfig;
pub use error::{Error, Result};
