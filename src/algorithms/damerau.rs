//! Damerau-Levenshtein distance implementation (optimal string alignment)
//!
//! Extends Levenshtein with adjacent transpositions, which makes it a good fit
//! for typing errors where letters get swapped.
//!
//! This is the *restricted* variant: a transposed pair may not be edited
//! again afterwards. For some inputs it therefore reports a larger distance
//! than unrestricted Damerau-Levenshtein:
//! - "CA" -> "ABC": OSA = 3 (two substitutions and an insertion), unrestricted = 2

use super::normalize::{to_chars, CharSeq};
use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Damerau-Levenshtein (OSA) distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(n), three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    /// Maximum distance for early termination
    pub max_distance: Option<usize>,
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Returns `None` if the distance exceeds the configured threshold.
    #[must_use]
    pub fn compute(&self, a: &str, b: &str) -> Option<usize> {
        damerau_levenshtein_distance_bounded(a, b, self.max_distance)
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        match self.max_distance {
            Some(max_d) => damerau_levenshtein_distance_bounded(a, b, Some(max_d))
                .unwrap_or(max_d.saturating_add(1)),
            None => damerau_levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// OSA recurrence over codepoint slices.
fn osa_chars(a: &[char], b: &[char], max_distance: Option<usize>) -> Option<usize> {
    let m = a.len();
    let n = b.len();

    let within = |d: usize| match max_distance {
        Some(max_d) if d > max_d => None,
        _ => Some(d),
    };

    if m == 0 {
        return within(n);
    }
    if n == 0 {
        return within(m);
    }
    if let Some(max_d) = max_distance {
        if m.abs_diff(n) > max_d {
            return None;
        }
    }

    // Transpositions look two rows back
    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + cost);
            }

            row_min = row_min.min(curr_row[j]);
        }

        if let Some(max_d) = max_distance {
            if row_min > max_d {
                return None;
            }
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    within(prev_row[n])
}

/// Compute optimal string alignment distance with an optional max threshold.
///
/// Returns `None` if the distance exceeds `max_distance`, `Some(distance)`
/// otherwise.
#[inline]
#[must_use]
pub fn damerau_levenshtein_distance_bounded(
    a: &str,
    b: &str,
    max_distance: Option<usize>,
) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let a_chars: CharSeq = to_chars(a);
    let b_chars: CharSeq = to_chars(b);
    osa_chars(&a_chars, &b_chars, max_distance)
}

/// Restricted Damerau-Levenshtein (OSA) distance.
///
/// # Example
/// ```
/// use strsim_metrics::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("CA", "AC"), 1);
/// assert_eq!(damerau_levenshtein("CA", "ABC"), 3);
/// ```
#[inline]
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    damerau_levenshtein_distance_bounded(a, b, None).unwrap_or_default()
}

/// Normalized OSA similarity (0.0 to 1.0), 1.0 for two empty strings.
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars: CharSeq = to_chars(a);
    let b_chars: CharSeq = to_chars(b);
    let dist = osa_chars(&a_chars, &b_chars, None).unwrap_or_default();
    normalized_similarity(dist, a_chars.len().max(b_chars.len()))
}
