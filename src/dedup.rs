//! Deduplication utilities
//!
//! Groups near-duplicate strings: every pair scoring at least a threshold is
//! linked, and linked items are merged transitively with union-find.

use crate::algorithms::{similarity, Similarity, SimilarityAlgorithm};
use crate::error::{validate_threshold, Result};
use rayon::prelude::*;

/// Result from deduplication operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeduplicationResult {
    /// Groups of near-duplicates, largest first; ties in first-seen order
    pub groups: Vec<Vec<String>>,
    /// Items linked to nothing else, in input order
    pub unique: Vec<String>,
    /// Items that could be dropped: sum of (group size - 1)
    pub total_duplicates: usize,
}

/// Deduplication methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupMethod {
    /// Compare all pairs (O(N^2)). Accurate but slow for large N.
    BruteForce,
    /// Sorted Neighborhood Method (O(N log N)). Sorts items and compares each
    /// only with the next `window_size` items in sorted order.
    SortedNeighborhood { window_size: usize },
}

/// Union-Find data structure for efficient clustering
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }
}

/// Find duplicate items in a list using an arbitrary similarity function.
///
/// # Arguments
/// * `items` - List of strings to deduplicate
/// * `similarity_fn` - Function that computes similarity between two strings
/// * `min_similarity` - Minimum similarity score to consider items as duplicates
/// * `method` - Deduplication method to use
pub fn find_duplicates<F>(
    items: &[String],
    similarity_fn: F,
    min_similarity: f64,
    method: DedupMethod,
) -> DeduplicationResult
where
    F: Fn(&str, &str) -> f64 + Sync + Send,
{
    tracing::debug!(items = items.len(), ?method, min_similarity, "deduplicating");

    if items.len() < 2 {
        return DeduplicationResult {
            unique: items.to_vec(),
            ..DeduplicationResult::default()
        };
    }

    let pairs = match method {
        DedupMethod::BruteForce => similar_pairs_brute_force(items, &similarity_fn, min_similarity),
        DedupMethod::SortedNeighborhood { window_size } => {
            similar_pairs_snm(items, &similarity_fn, min_similarity, window_size)
        }
    };

    let mut uf = UnionFind::new(items.len());
    for (i, j) in pairs {
        uf.union(i, j);
    }

    let result = collect_groups(items, &mut uf);
    tracing::trace!(
        groups = result.groups.len(),
        duplicates = result.total_duplicates,
        "deduplication finished"
    );
    result
}

/// Every pair `(i, j)`, `i < j`, scoring at least `min_similarity`.
///
/// Only matching pairs are collected, never the full N^2 candidate set.
fn similar_pairs_brute_force<F>(
    items: &[String],
    similarity_fn: &F,
    min_similarity: f64,
) -> Vec<(usize, usize)>
where
    F: Fn(&str, &str) -> f64 + Sync + Send,
{
    let n = items.len();
    (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..n).filter_map(move |j| {
                (similarity_fn(&items[i], &items[j]) >= min_similarity).then_some((i, j))
            })
        })
        .collect()
}

/// Matching pairs among lexicographic neighbours, in original indices.
fn similar_pairs_snm<F>(
    items: &[String],
    similarity_fn: &F,
    min_similarity: f64,
    window_size: usize,
) -> Vec<(usize, usize)>
where
    F: Fn(&str, &str) -> f64 + Sync + Send,
{
    let n = items.len();
    let window_size = window_size.max(1);

    // Sorting brings strings sharing a prefix next to each other
    let mut sorted: Vec<(usize, &str)> = items.iter().map(String::as_str).enumerate().collect();
    sorted.par_sort_unstable_by(|(ia, a), (ib, b)| a.cmp(b).then(ia.cmp(ib)));
    let sorted = &sorted;

    (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let end = i.saturating_add(1).saturating_add(window_size).min(n);
            let (orig_i, text_i) = sorted[i];
            (i + 1..end).filter_map(move |j| {
                let (orig_j, text_j) = sorted[j];
                (similarity_fn(text_i, text_j) >= min_similarity).then_some((orig_i, orig_j))
            })
        })
        .collect()
}

/// Split union-find components into duplicate groups and singletons.
fn collect_groups(items: &[String], uf: &mut UnionFind) -> DeduplicationResult {
    // Components keyed by root, ordered by first member's position
    let mut slot_of_root: ahash::AHashMap<usize, usize> = ahash::AHashMap::new();
    let mut components: Vec<Vec<String>> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let root = uf.find(i);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(item.clone());
    }

    let mut groups = Vec::new();
    let mut unique = Vec::new();
    for component in components {
        if component.len() > 1 {
            groups.push(component);
        } else {
            unique.extend(component);
        }
    }

    // Stable: equal-sized groups keep first-seen order
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    let total_duplicates = groups.iter().map(|g| g.len() - 1).sum();

    DeduplicationResult {
        groups,
        unique,
        total_duplicates,
    }
}

/// Find duplicates using a trait-based similarity metric
pub fn find_duplicates_with_metric<S: Similarity + ?Sized>(
    items: &[String],
    metric: &S,
    min_similarity: f64,
    method: DedupMethod,
) -> DeduplicationResult {
    find_duplicates(items, |a, b| metric.similarity(a, b), min_similarity, method)
}

/// Find duplicates with one of the named algorithms.
///
/// # Errors
/// Returns [`Error::InvalidThreshold`](crate::Error::InvalidThreshold) when
/// `min_similarity` is not a finite value in [0.0, 1.0].
///
/// # Example
/// ```
/// use strsim_metrics::dedup::{find_duplicates_with_algorithm, DedupMethod};
/// use strsim_metrics::SimilarityAlgorithm;
///
/// let items: Vec<String> = ["New York", "new york", "Boston"].iter().map(|s| s.to_string()).collect();
/// let result = find_duplicates_with_algorithm(
///     &items,
///     SimilarityAlgorithm::TokenBased,
///     0.9,
///     DedupMethod::BruteForce,
/// ).unwrap();
/// assert_eq!(result.groups, vec![vec!["New York".to_string(), "new york".to_string()]]);
/// assert_eq!(result.unique, vec!["Boston".to_string()]);
/// ```
pub fn find_duplicates_with_algorithm(
    items: &[String],
    algorithm: SimilarityAlgorithm,
    min_similarity: f64,
    method: DedupMethod,
) -> Result<DeduplicationResult> {
    validate_threshold(min_similarity)?;
    Ok(find_duplicates(
        items,
        |a, b| similarity(a, b, algorithm),
        min_similarity,
        method,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::jaro::JaroWinkler;
    use crate::error::Error;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn exact(a: &str, b: &str) -> f64 {
        if a == b {
            1.0
        } else {
            0.0
        }
    }

    #[test]
    fn test_find_duplicates_empty() {
        let items: Vec<String> = vec![];
        let result = find_duplicates(&items, exact, 0.8, DedupMethod::BruteForce);
        assert_eq!(result, DeduplicationResult::default());
    }

    #[test]
    fn test_find_duplicates_single() {
        let items = strings(&["hello"]);
        let result = find_duplicates(&items, exact, 0.8, DedupMethod::BruteForce);
        assert!(result.groups.is_empty());
        assert_eq!(result.unique, items);
        assert_eq!(result.total_duplicates, 0);
    }

    #[test]
    fn test_find_duplicates_basic() {
        let items = strings(&["hello", "helo", "world", "hello"]);
        let jw = JaroWinkler::new();
        let result = find_duplicates_with_metric(&items, &jw, 0.85, DedupMethod::BruteForce);

        assert_eq!(result.groups, vec![strings(&["hello", "helo", "hello"])]);
        assert_eq!(result.unique, strings(&["world"]));
        assert_eq!(result.total_duplicates, 2);
    }

    #[test]
    fn test_find_duplicates_all_unique() {
        let items = strings(&["apple", "banana", "cherry"]);
        let jw = JaroWinkler::new();
        let result = find_duplicates_with_metric(&items, &jw, 0.9, DedupMethod::BruteForce);

        assert!(result.groups.is_empty());
        assert_eq!(result.unique.len(), 3);
        assert_eq!(result.total_duplicates, 0);
    }

    #[test]
    fn test_find_duplicates_all_same() {
        let items = strings(&["test", "test", "test"]);
        let result = find_duplicates(&items, exact, 0.99, DedupMethod::BruteForce);

        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].len(), 3);
        assert!(result.unique.is_empty());
        assert_eq!(result.total_duplicates, 2);
    }

    #[test]
    fn test_transitive_grouping() {
        // a~b and b~c link a and c even though a !~ c
        let items = strings(&["abcd", "abce", "abfe"]);
        let result = find_duplicates_with_algorithm(
            &items,
            SimilarityAlgorithm::Levenshtein,
            0.75,
            DedupMethod::BruteForce,
        )
        .unwrap();
        assert_eq!(result.groups, vec![items.clone()]);
    }

    #[test]
    fn test_sorted_neighborhood() {
        let items = strings(&["zebra", "apple", "zebra", "mango", "apple"]);
        let result = find_duplicates(
            &items,
            exact,
            1.0,
            DedupMethod::SortedNeighborhood { window_size: 1 },
        );
        assert_eq!(result.groups, vec![strings(&["zebra", "zebra"]), strings(&["apple", "apple"])]);
        assert_eq!(result.unique, strings(&["mango"]));
        assert_eq!(result.total_duplicates, 2);

        // Zero window is treated as one
        let zero = find_duplicates(
            &items,
            exact,
            1.0,
            DedupMethod::SortedNeighborhood { window_size: 0 },
        );
        assert_eq!(zero, result);
    }

    #[test]
    fn test_sorted_neighborhood_unbounded_window() {
        let items = strings(&["b", "a", "b", "a"]);
        let result = find_duplicates(
            &items,
            exact,
            0.5,
            DedupMethod::SortedNeighborhood { window_size: usize::MAX },
        );
        let brute = find_duplicates(&items, exact, 0.5, DedupMethod::BruteForce);
        assert_eq!(result, brute);
        assert_eq!(result.groups, vec![strings(&["b", "b"]), strings(&["a", "a"])]);
    }

    #[test]
    fn test_invalid_threshold() {
        let items = strings(&["a", "b"]);
        assert_eq!(
            find_duplicates_with_algorithm(&items, SimilarityAlgorithm::Hamming, -0.5, DedupMethod::BruteForce),
            Err(Error::InvalidThreshold(-0.5))
        );
    }

    #[test]
    #[ignore]
    fn test_large_input_completes() {
        let items: Vec<String> = (0..5000).map(|i| format!("item_{i}")).collect();
        let result = find_duplicates_with_algorithm(
            &items,
            SimilarityAlgorithm::Levenshtein,
            0.9,
            DedupMethod::BruteForce,
        )
        .unwrap();
        assert_eq!(result.total_duplicates, 0);
    }
}
