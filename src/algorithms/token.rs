//! Token-based similarity
//!
//! Word-level comparisons for strings whose word order may vary:
//! - `token_similarity`: Jaccard index over lower-cased token sets
//! - `token_sort_similarity`: sort tokens, rejoin, then Levenshtein similarity
//!
//! Tokens come from splitting on the literal space character (see
//! [`tokenize`](super::normalize::tokenize)).

use super::levenshtein::levenshtein_similarity;
use super::normalize::tokenize;
use super::Similarity;
use ahash::AHashSet;

/// Jaccard token-set similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenJaccard;

impl Similarity for TokenJaccard {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        token_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "token_jaccard"
    }
}

/// Token-sort similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSort;

impl Similarity for TokenSort {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        token_sort_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "token_sort"
    }
}

/// Unique lower-cased tokens of a string.
fn token_set(s: &str) -> AHashSet<String> {
    tokenize(s).into_iter().collect()
}

/// Tokenize, sort lexicographically, and rejoin with single spaces.
fn sorted_tokens(s: &str) -> String {
    let mut tokens = tokenize(s);
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Order-independent word matching: `|A ∩ B| / |A ∪ B|` over token sets.
///
/// Two inputs without tokens score 1.0; exactly one without tokens scores 0.0.
///
/// # Examples
/// ```
/// use strsim_metrics::token_similarity;
/// assert_eq!(token_similarity("hello world", "world hello"), 1.0);
/// assert_eq!(token_similarity("hello world", "hello"), 0.5);
/// ```
#[must_use]
pub fn token_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.len() + tokens_b.len() - intersection;

    intersection as f64 / union as f64
}

/// Compute similarity after tokenizing and sorting both strings.
///
/// Word order stops mattering while token content differences are still
/// penalized by edit distance.
///
/// # Examples
/// ```
/// use strsim_metrics::token_sort_similarity;
/// assert_eq!(token_sort_similarity("fuzzy wuzzy", "Wuzzy Fuzzy"), 1.0);
/// ```
#[must_use]
pub fn token_sort_similarity(a: &str, b: &str) -> f64 {
    let sorted_a = sorted_tokens(a);
    let sorted_b = sorted_tokens(b);
    levenshtein_similarity(&sorted_a, &sorted_b)
}
