//! Hamming distance implementation
//!
//! Counts positions where characters differ. Only defined for strings of
//! equal codepoint length.
//!
//! # Length Mismatch Behavior
//!
//! - **Free functions / `FallibleEditDistance`**: return `None` for unequal lengths
//! - **`Similarity`**: returns `0.0` for unequal lengths, the same lossy
//!   fallback the algorithm dispatcher uses
//!
//! # Complexity
//! - Time: O(n) where n is the string length
//! - Space: O(1)

use super::{FallibleEditDistance, Similarity};

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming_distance(a, b)
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        hamming_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Unequal-length strings score `0.0` here. Use [`FallibleEditDistance`] to
/// tell "no similarity" apart from "undefined comparison":
/// ```
/// use strsim_metrics::algorithms::{FallibleEditDistance, Hamming};
/// let h = Hamming::new();
/// assert_eq!(h.distance("abc", "xyz"), Some(3));
/// assert_eq!(h.distance("abc", "xy"), None);
/// ```
impl Similarity for Hamming {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        hamming_similarity(a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Calculate Hamming distance between two strings.
/// Returns None if strings have different codepoint lengths.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut distance = 0usize;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(ac), Some(bc)) => distance += usize::from(ac != bc),
            (None, None) => return Some(distance),
            _ => return None,
        }
    }
}

/// Normalized Hamming similarity: `1 - distance / len`, 1.0 for two empty
/// strings, `None` for strings of different lengths.
#[must_use]
pub fn hamming_similarity(a: &str, b: &str) -> Option<f64> {
    let dist = hamming_distance(a, b)?;
    let len = a.chars().count();

    if len == 0 {
        Some(1.0)
    } else {
        Some(1.0 - (dist as f64 / len as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_basic() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("abc", "abc"), Some(0));
        assert_eq!(hamming_distance("abc", "axc"), Some(1));
        assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
        assert_eq!(hamming_distance("karolin", "kerstin"), Some(3));
        assert_eq!(hamming_distance("1011101", "1001001"), Some(2));
        assert_eq!(hamming_distance("2173896", "2233796"), Some(3));
    }

    #[test]
    fn test_hamming_different_lengths() {
        assert_eq!(hamming_distance("abc", "abcd"), None);
        assert_eq!(hamming_distance("abcd", "abc"), None);
        assert_eq!(hamming_similarity("abc", "ab"), None);
        assert_eq!(Similarity::similarity(&Hamming::new(), "abc", "ab"), 0.0);
    }

    #[test]
    fn test_hamming_counts_codepoints() {
        // Same codepoint count, different byte lengths
        assert_eq!(hamming_distance("日本", "ab"), Some(2));
        assert_eq!(hamming_distance("君子和而不同", "小人同而不和"), Some(4));
    }

    #[test]
    fn test_hamming_similarity() {
        assert_eq!(hamming_similarity("", ""), Some(1.0));
        assert_eq!(hamming_similarity("abcd", "abcx"), Some(0.75));
        assert_eq!(hamming_similarity("abc", "xyz"), Some(0.0));
        assert_eq!(FallibleEditDistance::similarity(&Hamming, "abcd", "abcx"), Some(0.75));
    }
}
