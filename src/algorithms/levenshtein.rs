//! Levenshtein (edit) distance implementation
//!
//! Unit costs for insertion, deletion and substitution over codepoints.
//!
//! Two evaluation strategies produce identical distances:
//! - Myers bit-parallel algorithm when the shorter input fits in one 64-bit word
//! - Rolling single-row DP otherwise
//!
//! Both support early termination against a maximum distance.

use super::normalize::{to_chars, CharSeq};
use super::{normalized_similarity, EditDistance};
use ahash::AHashMap;
use smallvec::SmallVec;

/// Maximum pattern length for Myers bit-parallel algorithm (64 bits per block)
const MYERS_BLOCK_SIZE: usize = 64;

// ============================================================================
// Myers Bit-Parallel Algorithm
// ============================================================================

/// Per-character match masks: bit `i` is set for `c` when `pattern[i] == c`.
fn pattern_masks(pattern: &[char]) -> AHashMap<char, u64> {
    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(pattern.len().min(26));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }
    peq
}

/// Myers bit-parallel edit distance for a non-empty pattern of at most 64
/// characters against a non-empty text.
///
/// Returns `None` as soon as the running score can no longer come back under
/// `max_distance`.
///
/// Based on: Myers, G. (1999). "A fast bit-vector algorithm for approximate string matching"
fn myers(pattern: &[char], text: &[char], max_distance: Option<usize>) -> Option<usize> {
    debug_assert!(!pattern.is_empty() && pattern.len() <= MYERS_BLOCK_SIZE);

    let m = pattern.len();
    let n = text.len();
    let peq = pattern_masks(pattern);

    // Vertical deltas of the current column: all +1 initially
    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut score = m;
    let last = 1u64 << (m - 1);

    for (j, tc) in text.iter().enumerate() {
        let eq = peq.get(tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if hp & last != 0 {
            score += 1;
        } else if hn & last != 0 {
            score -= 1;
        }

        if let Some(max_d) = max_distance {
            // Each remaining column can lower the score by at most one
            if score.saturating_sub(n - j - 1) > max_d {
                return None;
            }
        }

        // Row 0 is 0,1,2,... so the horizontal delta entering bit 0 is +1
        let hp = (hp << 1) | 1;
        let hn = hn << 1;

        vp = hn | !(xv | hp);
        vn = hp & xv;
    }

    match max_distance {
        Some(max_d) if score > max_d => None,
        _ => Some(score),
    }
}

// ============================================================================
// Rolling-row DP
// ============================================================================

/// Single-row DP over any comparable slices, with optional early exit when a
/// whole row exceeds `max_distance`.
pub(crate) fn dp_distance<T: PartialEq>(
    a: &[T],
    b: &[T],
    max_distance: Option<usize>,
) -> Option<usize> {
    // Keep the shorter input on the column axis
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n).collect();

    for (i, sc) in source.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for j in 0..n {
            let cost = usize::from(*sc != target[j]);
            let cell = (row[j + 1] + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diagonal + cost); // substitution

            diagonal = row[j + 1];
            row[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if let Some(max_d) = max_distance {
            if row_min > max_d {
                return None;
            }
        }
    }

    match max_distance {
        Some(max_d) if row[n] > max_d => None,
        _ => Some(row[n]),
    }
}

/// Distance between two codepoint slices, dispatching to Myers when possible.
pub(crate) fn levenshtein_chars(
    a: &[char],
    b: &[char],
    max_distance: Option<usize>,
) -> Option<usize> {
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

    let (pattern, text) = if m <= n { (a, b) } else { (b, a) };
    if pattern.len() <= MYERS_BLOCK_SIZE {
        myers(pattern, text, max_distance)
    } else {
        dp_distance(pattern, text, max_distance)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance calculator with optional early termination
///
/// # Complexity
/// - Time: O(⌈m/64⌉·n) for the bit-parallel path, O(m·n) otherwise
/// - Space: O(min(m,n))
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
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
        levenshtein_distance_bounded(a, b, self.max_distance)
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        // Over-threshold pairs report max_distance + 1
        match self.max_distance {
            Some(max_d) => levenshtein_distance_bounded(a, b, Some(max_d))
                .unwrap_or(max_d.saturating_add(1)),
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Compute Levenshtein distance with an optional max threshold.
///
/// Returns `None` if the distance exceeds `max_distance`, `Some(distance)`
/// otherwise (always `Some` without a threshold).
///
/// # Example
/// ```
/// use strsim_metrics::algorithms::levenshtein::levenshtein_distance_bounded;
///
/// assert_eq!(levenshtein_distance_bounded("kitten", "sitting", None), Some(3));
/// assert_eq!(levenshtein_distance_bounded("abc", "abd", Some(2)), Some(1));
/// assert_eq!(levenshtein_distance_bounded("abcdef", "ghijkl", Some(3)), None);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_distance_bounded(a: &str, b: &str, max_distance: Option<usize>) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let a_chars: CharSeq = to_chars(a);
    let b_chars: CharSeq = to_chars(b);
    levenshtein_chars(&a_chars, &b_chars, max_distance)
}

/// Levenshtein edit distance between two strings.
///
/// If either string is empty the distance is the other's codepoint length.
///
/// # Example
/// ```
/// use strsim_metrics::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("君子和而不同", "小人同而不和"), 4);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    // Unbounded computation always yields a value
    levenshtein_distance_bounded(a, b, None).unwrap_or_default()
}

/// Normalized similarity: `1 - distance / max(|a|, |b|)`, 1.0 for two empty strings.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars: CharSeq = to_chars(a);
    let b_chars: CharSeq = to_chars(b);
    let dist = levenshtein_chars(&a_chars, &b_chars, None).unwrap_or_default();
    normalized_similarity(dist, a_chars.len().max(b_chars.len()))
}
