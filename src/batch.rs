//! One-query-against-many scoring
//!
//! Scores a query against a list of choices with any metric, in parallel on
//! the rayon pool once the list is large enough to amortize the overhead.

use crate::algorithms::{Similarity, SimilarityAlgorithm};
use crate::error::{validate_threshold, Result};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Minimum input size for parallel processing.
///
/// Below this many choices, sequential scoring beats the cost of
/// coordinating the thread pool for typical per-pair comparison costs.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A scored choice.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched text
    pub text: String,
    /// Similarity score (0.0-1.0)
    pub score: f64,
    /// Position of the choice in the input slice
    pub index: usize,
}

/// Highest score first; equal scores keep input order.
fn by_score_desc(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.index.cmp(&b.index))
}

/// Score every choice against `query` with an arbitrary metric.
///
/// Results are returned in input order, one per choice.
pub fn batch_similarity_with_metric<S, M>(query: &str, choices: &[S], metric: &M) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
    M: Similarity + ?Sized,
{
    let score = |(index, choice): (usize, &S)| {
        let text = choice.as_ref();
        MatchResult {
            text: text.to_owned(),
            score: metric.similarity(query, text),
            index,
        }
    };

    let parallel = choices.len() >= PARALLEL_THRESHOLD;
    tracing::debug!(
        choices = choices.len(),
        metric = metric.name(),
        parallel,
        "scoring batch"
    );

    if parallel {
        choices.par_iter().enumerate().map(score).collect()
    } else {
        choices.iter().enumerate().map(score).collect()
    }
}

/// Score every choice against `query` with the selected algorithm.
///
/// # Example
/// ```
/// use strsim_metrics::batch::batch_similarity;
/// use strsim_metrics::SimilarityAlgorithm;
///
/// let results = batch_similarity("apple", &["apple", "apply", "banana"], SimilarityAlgorithm::Levenshtein);
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].score, 1.0);
/// assert_eq!(results[1].index, 1);
/// ```
pub fn batch_similarity<S>(query: &str, choices: &[S], algorithm: SimilarityAlgorithm) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
{
    batch_similarity_with_metric(query, choices, &algorithm)
}

/// Choices scoring at least `min_similarity`, best first, at most `limit`.
///
/// # Errors
/// Returns [`Error::InvalidThreshold`](crate::Error::InvalidThreshold) when
/// `min_similarity` is not a finite value in [0.0, 1.0].
pub fn find_best_matches<S>(
    query: &str,
    choices: &[S],
    algorithm: SimilarityAlgorithm,
    min_similarity: f64,
    limit: usize,
) -> Result<Vec<MatchResult>>
where
    S: AsRef<str> + Sync,
{
    validate_threshold(min_similarity)?;

    let mut results: Vec<MatchResult> = batch_similarity(query, choices, algorithm)
        .into_iter()
        .filter(|r| r.score >= min_similarity)
        .collect();

    results.sort_by(by_score_desc);
    results.truncate(limit);

    tracing::trace!(matched = results.len(), "best matches selected");
    Ok(results)
}

/// The single best choice scoring at least `min_similarity`, if any.
/// Ties go to the earliest choice.
///
/// # Errors
/// Same threshold validation as [`find_best_matches`].
pub fn extract_one<S>(
    query: &str,
    choices: &[S],
    algorithm: SimilarityAlgorithm,
    min_similarity: f64,
) -> Result<Option<MatchResult>>
where
    S: AsRef<str> + Sync,
{
    Ok(find_best_matches(query, choices, algorithm, min_similarity, 1)?
        .into_iter()
        .next())
}
