//! MostFreqK character-frequency metrics
//!
//! Strings are summarized by their K most frequent characters:
//! - `most_freq_k_distance`: summed count differences between the two top-K vectors
//! - `most_freq_k_similarity`: the distance scaled by `max(|a|, |b|) * k`
//! - `normalized_most_freq_k_similarity`: cosine similarity of the top-K
//!   vectors after normalizing each to sum to one
//!
//! # Complexity
//! - Time: O(m+n) to count, plus O(u log u) to rank u distinct characters
//! - Space: O(u)

use super::normalize::char_len;
use super::Similarity;
use ahash::AHashMap;

/// Default number of most frequent characters compared.
pub const DEFAULT_K: usize = 2;

/// A character and its number of occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyEntry {
    pub character: char,
    pub count: usize,
}

/// MostFreqK similarity calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostFreqK {
    pub k: usize,
}

impl Default for MostFreqK {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

impl MostFreqK {
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        most_freq_k_distance(a, b, self.k)
    }
}

impl Similarity for MostFreqK {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        most_freq_k_similarity(a, b, self.k)
    }

    fn name(&self) -> &'static str {
        "most_freq_k"
    }
}

/// Cosine-normalized MostFreqK similarity calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedMostFreqK {
    pub k: usize,
}

impl Default for NormalizedMostFreqK {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

impl NormalizedMostFreqK {
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl Similarity for NormalizedMostFreqK {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_most_freq_k_similarity(a, b, self.k)
    }

    fn name(&self) -> &'static str {
        "normalized_most_freq_k"
    }
}

/// Count occurrences of each character in a single pass.
#[must_use]
pub fn char_frequencies(s: &str) -> AHashMap<char, usize> {
    let mut map = AHashMap::new();
    for c in s.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

/// The `k` most frequent characters, by descending count with ties broken by
/// ascending character value.
///
/// # Example
/// ```
/// use strsim_metrics::algorithms::freq::{most_frequent_k, FrequencyEntry};
///
/// let top = most_frequent_k("research", 2);
/// assert_eq!(top, vec![
///     FrequencyEntry { character: 'e', count: 2 },
///     FrequencyEntry { character: 'r', count: 2 },
/// ]);
/// ```
#[must_use]
pub fn most_frequent_k(s: &str, k: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = char_frequencies(s)
        .into_iter()
        .map(|(character, count)| FrequencyEntry { character, count })
        .collect();

    // Characters are unique keys, so this order is total
    entries.sort_unstable_by(|x, y| {
        y.count
            .cmp(&x.count)
            .then_with(|| x.character.cmp(&y.character))
    });
    entries.truncate(k);
    entries
}

fn count_of(entries: &[FrequencyEntry], character: char) -> Option<usize> {
    entries
        .iter()
        .find(|e| e.character == character)
        .map(|e| e.count)
}

/// MostFreqK distance between two strings.
///
/// - both empty: 0
/// - exactly one empty: `max(|a|, |b|) * k`, a fixed penalty regardless of
///   the non-empty string's frequencies
/// - otherwise: for each top-K character of `a`, the absolute count difference
///   if `b`'s top-K also holds it, else its count; plus the counts of `b`'s
///   top-K characters missing from `a`'s
///
/// # Example
/// ```
/// use strsim_metrics::most_freq_k_distance;
/// assert_eq!(most_freq_k_distance("aabb", "aacc", 2), 4);
/// ```
#[must_use]
pub fn most_freq_k_distance(a: &str, b: &str, k: usize) -> usize {
    if a.is_empty() && b.is_empty() {
        return 0;
    }
    if a.is_empty() || b.is_empty() {
        return char_len(a).max(char_len(b)).saturating_mul(k);
    }

    let top_a = most_frequent_k(a, k);
    let top_b = most_frequent_k(b, k);

    let shared_or_a_only: usize = top_a
        .iter()
        .map(|entry| match count_of(&top_b, entry.character) {
            Some(count_b) => entry.count.abs_diff(count_b),
            None => entry.count,
        })
        .sum();

    let b_only: usize = top_b
        .iter()
        .filter(|entry| count_of(&top_a, entry.character).is_none())
        .map(|entry| entry.count)
        .sum();

    shared_or_a_only + b_only
}

/// MostFreqK similarity: `1 - distance / (max(|a|, |b|) * k)`.
///
/// A zero denominator scores 1.0. For `k >= 2` the distance never exceeds the
/// denominator; with `k == 1` it can, and the score is floored at 0.0.
#[must_use]
pub fn most_freq_k_similarity(a: &str, b: &str, k: usize) -> f64 {
    let distance = most_freq_k_distance(a, b, k);
    let max_possible = char_len(a).max(char_len(b)).saturating_mul(k);
    if max_possible == 0 {
        return 1.0;
    }
    (1.0 - (distance as f64 / max_possible as f64)).max(0.0)
}

/// Top-K entries as weights summing to one, in top-K order.
fn normalized_weights(entries: &[FrequencyEntry]) -> Vec<(char, f64)> {
    let total: usize = entries.iter().map(|e| e.count).sum();
    entries
        .iter()
        .map(|e| (e.character, e.count as f64 / total as f64))
        .collect()
}

fn weight_of(weights: &[(char, f64)], character: char) -> Option<f64> {
    weights
        .iter()
        .find(|(c, _)| *c == character)
        .map(|&(_, w)| w)
}

/// Cosine similarity of the normalized top-K frequency vectors.
///
/// Two empty strings score 1.0, exactly one empty string 0.0. Characters
/// outside a string's top-K weigh zero. A zero-magnitude vector (`k == 0`)
/// scores 0.0.
///
/// # Example
/// ```
/// use strsim_metrics::normalized_most_freq_k_similarity;
///
/// let score = normalized_most_freq_k_similarity("research", "seeking", 2);
/// assert!((score - 0.632).abs() < 0.001);
/// ```
#[must_use]
pub fn normalized_most_freq_k_similarity(a: &str, b: &str, k: usize) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b && k > 0 {
        return 1.0;
    }

    let weights_a = normalized_weights(&most_frequent_k(a, k));
    let weights_b = normalized_weights(&most_frequent_k(b, k));

    // Shared terms are summed in character order so swapping the inputs
    // adds the same floats in the same order
    let mut shared: Vec<(char, f64)> = weights_a
        .iter()
        .filter_map(|&(c, wa)| weight_of(&weights_b, c).map(|wb| (c, wa * wb)))
        .collect();
    shared.sort_unstable_by_key(|&(c, _)| c);

    let dot_product = shared.iter().fold(0.0f64, |acc, &(_, p)| acc + p);
    let magnitude_a = weights_a.iter().fold(0.0f64, |acc, &(_, w)| acc + w * w);
    let magnitude_b = weights_b.iter().fold(0.0f64, |acc, &(_, w)| acc + w * w);

    let magnitude = magnitude_a.sqrt() * magnitude_b.sqrt();
    if magnitude == 0.0 {
        0.0
    } else {
        (dot_product / magnitude).min(1.0)
    }
}
