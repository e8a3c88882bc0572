//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility. Every algorithm indexes
//! input by Unicode scalar value (`char`), never by byte or grapheme cluster.

pub mod normalize;
pub mod levenshtein;
pub mod damerau;
pub mod jaro;
pub mod token;
pub mod hamming;
pub mod freq;
pub mod combined;

pub use levenshtein::*;
pub use damerau::*;
pub use jaro::*;
pub use token::*;
pub use hamming::*;
pub use freq::*;
pub use combined::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let dist = self.distance(a, b);
        let max_len = normalize::char_len(a).max(normalize::char_len(b));
        normalized_similarity(dist, max_len)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Trait for edit distance algorithms that may be undefined for some inputs.
///
/// Hamming distance, for instance, only exists for equal-length strings.
/// Types implementing this trait should also implement `Similarity` by hand
/// to decide what an undefined comparison scores.
pub trait FallibleEditDistance: Send + Sync {
    /// Compute distance, returning None if the comparison is undefined
    fn distance(&self, a: &str, b: &str) -> Option<usize>;

    /// Normalized similarity, or None when the distance is undefined.
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        self.distance(a, b).map(|dist| {
            let max_len = normalize::char_len(a).max(normalize::char_len(b));
            normalized_similarity(dist, max_len)
        })
    }

    fn name(&self) -> &'static str;
}

/// `1 - distance / max_len`, with an empty comparison scoring 1.0.
#[inline]
pub(crate) fn normalized_similarity(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        1.0
    } else {
        1.0 - (distance as f64 / max_len as f64)
    }
}
