//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! # Performance Optimization
//!
//! ASCII inputs are matched directly on bytes. For ASCII, bytes and
//! codepoints coincide, so both paths produce identical scores.

use super::normalize::{to_chars, to_lowercase_chars, CharSeq};
use super::Similarity;
use smallvec::SmallVec;

/// Conventional Jaro-Winkler prefix scale.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Largest prefix scale that keeps Jaro-Winkler within [0.0, 1.0].
pub const MAX_PREFIX_SCALE: f64 = 0.25;

/// Number of leading characters eligible for the prefix bonus.
pub const MAX_PREFIX_LENGTH: usize = 4;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) worst case for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by boosting pairs that share a (case-insensitive)
/// prefix of up to four characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    /// Prefix scale (typically 0.1, at most 0.25)
    pub prefix_scale: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            prefix_scale: DEFAULT_PREFIX_SCALE,
        }
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix_scale(mut self, scale: f64) -> Self {
        self.prefix_scale = clamp_prefix_scale(scale);
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_with_scale(a, b, self.prefix_scale)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Clamp a prefix scale into [0.0, 0.25], logging when the caller's value
/// had to be changed.
fn clamp_prefix_scale(scale: f64) -> f64 {
    if (0.0..=MAX_PREFIX_SCALE).contains(&scale) {
        return scale;
    }
    let clamped = if scale.is_nan() {
        DEFAULT_PREFIX_SCALE
    } else {
        scale.clamp(0.0, MAX_PREFIX_SCALE)
    };
    tracing::warn!(
        requested = scale,
        clamped,
        "jaro-winkler prefix scale outside [0.0, 0.25]"
    );
    clamped
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
///
/// Two empty strings score 1.0; exactly one empty string scores 0.0.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_slices(a.as_bytes(), b.as_bytes());
    }

    let a_chars: CharSeq = to_chars(a);
    let b_chars: CharSeq = to_chars(b);
    jaro_slices(&a_chars, &b_chars)
}

/// Jaro over any comparable sequence.
fn jaro_slices<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // max/2 - 1 goes negative only for single-character inputs; a negative
    // window behaves like a zero window
    let window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];
    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk matched characters of both sides in order
    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for i in (0..a_len).filter(|&i| a_matched[i]) {
        while k < b_len && !b_matched[k] {
            k += 1;
        }
        if k >= b_len {
            break;
        }
        if a[i] != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Length of the common prefix of the lower-cased inputs, capped at four.
fn common_prefix_length(a: &str, b: &str) -> usize {
    let a_lower = to_lowercase_chars(a);
    let b_lower = to_lowercase_chars(b);
    a_lower
        .iter()
        .zip(b_lower.iter())
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(ac, bc)| ac == bc)
        .count()
}

/// Jaro-Winkler similarity with a custom prefix scale.
///
/// `jaro + prefix_len * prefix_scale * (1 - jaro)`, where `prefix_len` is the
/// case-insensitive common prefix length capped at four.
///
/// `prefix_scale` is clamped to [0.0, 0.25] before use: larger values act as
/// 0.25, negative values as 0.0, and NaN as the default 0.1. A clamped scale
/// logs a warning. The result is therefore always within [0.0, 1.0], and
/// callers wanting a hard error should check the scale with
/// [`SimilarityConfig::validate`](crate::SimilarityConfig::validate) first.
///
/// Because the prefix is compared case-insensitively while Jaro is not,
/// "ABC" vs "abc" scores 0.3 despite a Jaro similarity of 0.0.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_with_scale(a: &str, b: &str, prefix_scale: f64) -> f64 {
    let jaro_sim = jaro_similarity(a, b);
    let prefix_scale = clamp_prefix_scale(prefix_scale);
    let prefix_len = common_prefix_length(a, b);

    jaro_sim + (prefix_len as f64 * prefix_scale * (1.0 - jaro_sim))
}

/// Jaro-Winkler similarity with the conventional prefix scale of 0.1.
///
/// # Example
/// ```
/// use strsim_metrics::jaro_winkler_similarity;
///
/// let score = jaro_winkler_similarity("MARTHA", "MARHTA");
/// assert!((score - 0.961).abs() < 0.001);
/// ```
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_with_scale(a, b, DEFAULT_PREFIX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "abc"), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
        assert_eq!(jaro_similarity("", "Yo"), 0.0);
        assert_eq!(jaro_similarity("Yo", ""), 0.0);
    }

    #[test]
    fn test_jaro_examples() {
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro_similarity("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro_similarity("DIXON", "DICKSONX"), 0.767));
        assert!(approx_eq(jaro_similarity("hello", "hallo"), 0.867));
    }

    #[test]
    fn test_jaro_single_character_window() {
        // Window would be -1; only identical positions can match
        assert_eq!(jaro_similarity("a", "b"), 0.0);
        assert_eq!(jaro_similarity("a", "a"), 1.0);
        assert!(approx_eq(jaro_similarity("a", "ab"), (1.0 + 0.5 + 1.0) / 3.0));
    }

    #[test]
    fn test_jaro_unicode_path_matches_ascii_path() {
        let ascii = jaro_similarity("MARTHA", "MARHTA");
        let chars_a = to_chars("MARTHA");
        let chars_b = to_chars("MARHTA");
        assert!(approx_eq(ascii, jaro_slices(&chars_a, &chars_b)));

        assert!(approx_eq(jaro_similarity("君子和而不同", "小人同而不和"), 0.555));
        assert!(jaro_similarity("cafe", "caf\u{00e9}") > 0.8);
    }

    #[test]
    fn test_jaro_winkler_examples() {
        assert_eq!(jaro_winkler_similarity("", ""), 1.0);
        assert_eq!(jaro_winkler_similarity("", "Yo"), 0.0);
        assert_eq!(jaro_winkler_similarity("search", "find"), 0.0);
        assert_eq!(jaro_winkler_similarity("search", "search"), 1.0);
        assert!(approx_eq(jaro_winkler_similarity("MARTHA", "MARHTA"), 0.961));
        assert!(approx_eq(jaro_winkler_similarity("DWAYNE", "DUANE"), 0.84));
        assert!(approx_eq(jaro_winkler_similarity("DIXON", "DICKSONX"), 0.813));
        assert!(approx_eq(jaro_winkler_similarity("kitten", "sitting"), 0.746));
        assert!(approx_eq(jaro_winkler_similarity("君子和而不同", "小人同而不和"), 0.555));
    }

    #[test]
    fn test_jaro_winkler_boost() {
        let jaro = jaro_similarity("MARTHA", "MARHTA");
        let jaro_winkler = jaro_winkler_similarity("MARTHA", "MARHTA");
        assert!(jaro_winkler > jaro);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(jaro_similarity("ABC", "abc"), 0.0);
        assert!(approx_eq(jaro_winkler_similarity("ABC", "abc"), 0.3));
    }

    #[test]
    fn test_prefix_scale_is_clamped() {
        let high = jaro_winkler_similarity_with_scale("MARTHA", "MARHTA", 0.9);
        let max = jaro_winkler_similarity_with_scale("MARTHA", "MARHTA", MAX_PREFIX_SCALE);
        assert_eq!(high, max);
        assert!(high <= 1.0);

        let none = jaro_winkler_similarity_with_scale("MARTHA", "MARHTA", -1.0);
        assert_eq!(none, jaro_similarity("MARTHA", "MARHTA"));

        assert_eq!(JaroWinkler::new().with_prefix_scale(0.5).prefix_scale, MAX_PREFIX_SCALE);

        let nan = jaro_winkler_similarity_with_scale("MARTHA", "MARHTA", f64::NAN);
        assert_eq!(nan, jaro_winkler_similarity("MARTHA", "MARHTA"));
        for scale in [f64::INFINITY, 10.0, 1.0] {
            let score = jaro_winkler_similarity_with_scale("ABCD", "abcd", scale);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_struct_interface() {
        let jw = JaroWinkler::default();
        assert_eq!(jw.similarity("MARTHA", "MARHTA"), jaro_winkler_similarity("MARTHA", "MARHTA"));
        assert_eq!(Similarity::name(&jw), "jaro_winkler");
        assert_eq!(Jaro::new().similarity("MARTHA", "MARHTA"), jaro_similarity("MARTHA", "MARHTA"));
    }
}
