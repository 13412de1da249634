//! The fuzzy string index: insertion and staged retrieval.

use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::postings::GramTable;
use crate::index::IndexStats;
use crate::similarity::{Levenshtein, SimilarityMeasure};
use crate::text::{gram_counts, normalize};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A retrieval result: a similarity score in `[0, 1]` and the matched
/// string in its original (pre-normalization) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Similarity to the query.
    pub score: f64,
    /// The stored string as originally inserted.
    pub value: String,
}

/// A scored candidate still in normalized form, flowing between the
/// pipeline stages.
#[derive(Debug, Clone)]
struct Candidate {
    score: f64,
    normalized: String,
}

/// In-memory approximate string-matching index.
///
/// Stored strings are decomposed into n-gram frequency vectors at every
/// configured gram size. Retrieval checks the exact set first, then
/// scores candidates by cosine similarity over shared grams at
/// decreasing gram sizes, optionally re-ranking the best candidates by
/// normalized Levenshtein similarity.
///
/// The index grows monotonically; entries cannot be removed. It has no
/// interior locking, so concurrent mutation must be serialized by the
/// caller.
///
/// # Example
///
/// ```rust
/// use gramdex::FuzzyIndex;
///
/// let mut index = FuzzyIndex::new();
/// index.insert("France");
/// index.insert("French");
///
/// let matches = index.query("franc");
/// assert_eq!(matches[0].value, "France");
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    config: IndexConfig,
    /// Maps lookup key (lowercased) -> original string.
    exact: HashMap<String, String>,
    /// Postings and per-gram-size vector tables.
    table: GramTable,
}

impl Default for FuzzyIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyIndex {
    /// Creates an empty index with the default configuration
    /// (gram sizes 2..=3, Levenshtein refinement enabled).
    pub fn new() -> Self {
        Self {
            config: IndexConfig::default(),
            exact: HashMap::new(),
            table: GramTable::new(),
        }
    }

    /// Creates an empty index with a custom configuration.
    ///
    /// Fails fast if the configuration is invalid.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            exact: HashMap::new(),
            table: GramTable::new(),
        })
    }

    /// Creates an index seeded with `values`, inserted in order.
    ///
    /// Case-insensitive duplicates are silently rejected, matching
    /// [`insert`](Self::insert).
    pub fn from_values<I, S>(values: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::with_config(config)?;
        let mut inserted = 0usize;
        let mut seen = 0usize;
        for value in values {
            seen += 1;
            if index.insert(value.as_ref()) {
                inserted += 1;
            }
        }
        debug!("seeded index with {inserted} of {seen} values");
        Ok(index)
    }

    /// Inserts a string into the index.
    ///
    /// Returns `false` without mutating anything when the string is
    /// already present (case-insensitively). On success the string is
    /// indexed at every configured gram size and becomes retrievable
    /// both exactly and fuzzily.
    pub fn insert(&mut self, value: &str) -> bool {
        let normalized = normalize(value);
        if self.exact.contains_key(&normalized) {
            return false;
        }
        for gram_size in self.config.gram_sizes() {
            self.table.index_item(&normalized, gram_size);
        }
        self.exact.insert(normalized, value.to_string());
        true
    }

    /// Queries with the default minimum score
    /// ([`DEFAULT_MIN_SCORE`](crate::DEFAULT_MIN_SCORE)).
    pub fn query(&self, value: &str) -> Vec<Match> {
        self.query_min_score(value, crate::DEFAULT_MIN_SCORE)
    }

    /// Queries for stored strings resembling `value`, keeping matches
    /// scoring at least `min_score`.
    ///
    /// Results are sorted by descending score. An exact (case-insensitive)
    /// hit short-circuits with a single score-1.0 match. Otherwise gram
    /// sizes are tried from the largest down to the smallest and the
    /// first size producing any surviving match wins; an empty vec means
    /// no size produced one.
    pub fn query_min_score(&self, value: &str, min_score: f64) -> Vec<Match> {
        self.lookup(value, min_score).unwrap_or_default()
    }

    /// Like [`query_min_score`](Self::query_min_score), but returns
    /// `fallback` when no gram size yields a surviving match.
    pub fn query_or(&self, value: &str, min_score: f64, fallback: Vec<Match>) -> Vec<Match> {
        self.lookup(value, min_score).unwrap_or(fallback)
    }

    fn lookup(&self, value: &str, min_score: f64) -> Option<Vec<Match>> {
        let normalized = normalize(value);
        if let Some(original) = self.exact.get(&normalized) {
            return Some(vec![Match {
                score: 1.0,
                value: original.clone(),
            }]);
        }

        for gram_size in self.config.gram_sizes().rev() {
            let matches = self.query_at_size(&normalized, gram_size, min_score);
            if !matches.is_empty() {
                return Some(matches);
            }
            trace!("no matches above {min_score} at gram size {gram_size}");
        }
        None
    }

    /// Runs the scoring pipeline at one gram size:
    /// cosine source -> optional Levenshtein refiner -> threshold filter.
    fn query_at_size(&self, normalized: &str, gram_size: usize, min_score: f64) -> Vec<Match> {
        let mut candidates = self.cosine_candidates(normalized, gram_size);
        if candidates.is_empty() {
            return Vec::new();
        }

        if self.config.use_levenshtein {
            refine(&mut candidates, &Levenshtein, normalized, self.config.refine_limit);
        }
        debug!(
            "{} candidates at gram size {gram_size} for {normalized:?}",
            candidates.len()
        );

        candidates
            .into_iter()
            .filter(|candidate| candidate.score >= min_score)
            .filter_map(|candidate| {
                self.exact.get(&candidate.normalized).map(|original| Match {
                    score: candidate.score,
                    value: original.clone(),
                })
            })
            .collect()
    }

    /// Cosine-similarity stage: scores every item sharing at least one
    /// gram with the query, sorted by descending score.
    fn cosine_candidates(&self, normalized: &str, gram_size: usize) -> Vec<Candidate> {
        let counts = gram_counts(normalized, gram_size);

        let mut sum_of_squares = 0.0;
        let mut dot_products: HashMap<u32, u64> = HashMap::new();
        for (gram, count) in &counts {
            sum_of_squares += (count * count) as f64;
            if let Some(postings) = self.table.postings(gram) {
                for posting in postings {
                    *dot_products.entry(posting.item).or_insert(0) +=
                        *count as u64 * posting.count as u64;
                }
            }
        }
        if dot_products.is_empty() {
            return Vec::new();
        }

        let query_norm = sum_of_squares.sqrt();
        let mut candidates: Vec<Candidate> = dot_products
            .into_iter()
            .filter_map(|(item, dot)| {
                self.table.entry(gram_size, item).map(|entry| Candidate {
                    score: dot as f64 / (query_norm * entry.norm),
                    normalized: entry.normalized.clone(),
                })
            })
            .collect();
        sort_by_score(&mut candidates);
        candidates
    }

    /// Number of stored strings.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Checks whether the index holds no strings.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Checks whether `value` is stored (case-insensitively).
    pub fn contains(&self, value: &str) -> bool {
        self.exact.contains_key(&normalize(value))
    }

    /// Returns the stored original strings.
    ///
    /// Iteration order is unspecified (underlying hash-map order).
    pub fn values(&self) -> Vec<String> {
        self.exact.values().cloned().collect()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns statistics about the underlying gram storage.
    pub fn stats(&self) -> IndexStats {
        self.table.stats()
    }
}

/// Sorts candidates by descending score, breaking ties on the
/// normalized string so equal scores order deterministically.
fn sort_by_score(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.normalized.cmp(&b.normalized))
    });
}

/// Refiner stage: truncates to the top `limit` candidates and replaces
/// each cosine score with the measure's similarity against the
/// normalized query, then re-sorts. Scores are replaced, not blended.
fn refine<M: SimilarityMeasure>(
    candidates: &mut Vec<Candidate>,
    measure: &M,
    normalized_query: &str,
    limit: usize,
) {
    candidates.truncate(limit);
    for candidate in candidates.iter_mut() {
        candidate.score = measure.similarity(&candidate.normalized, normalized_query);
    }
    sort_by_score(candidates);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(score: f64, normalized: &str) -> Candidate {
        Candidate {
            score,
            normalized: normalized.to_string(),
        }
    }

    #[test]
    fn test_sort_by_score_descending_with_tiebreak() {
        let mut candidates = vec![
            candidate(0.5, "bbb"),
            candidate(0.9, "ccc"),
            candidate(0.5, "aaa"),
        ];
        sort_by_score(&mut candidates);
        assert_eq!(candidates[0].normalized, "ccc");
        assert_eq!(candidates[1].normalized, "aaa");
        assert_eq!(candidates[2].normalized, "bbb");
    }

    #[test]
    fn test_refine_replaces_scores() {
        let mut candidates = vec![candidate(0.9, "french"), candidate(0.7, "france")];
        refine(&mut candidates, &Levenshtein, "franc", 50);
        // Levenshtein promotes "france" (1 edit) over "french" (2 edits).
        assert_eq!(candidates[0].normalized, "france");
        assert!((candidates[0].score - (1.0 - 1.0 / 6.0)).abs() < 1e-10);
        assert!((candidates[1].score - (1.0 - 2.0 / 6.0)).abs() < 1e-10);
    }

    #[test]
    fn test_refine_truncates_to_limit() {
        let mut candidates = vec![
            candidate(0.9, "aa"),
            candidate(0.8, "ab"),
            candidate(0.7, "ac"),
        ];
        refine(&mut candidates, &Levenshtein, "aa", 2);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_insert_rejects_case_insensitive_duplicates() {
        let mut index = FuzzyIndex::new();
        assert!(index.insert("France"));
        assert!(!index.insert("france"));
        assert!(!index.insert("FRANCE"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let mut index = FuzzyIndex::new();
        index.insert("France");
        index.insert("Francea");

        let matches = index.query("FRANCE");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1.0);
        // Original casing comes back.
        assert_eq!(matches[0].value, "France");
    }

    #[test]
    fn test_cosine_candidates_empty_without_shared_grams() {
        let mut index = FuzzyIndex::new();
        index.insert("France");
        assert!(index.cosine_candidates("zzz", 3).is_empty());
        assert!(index.cosine_candidates("zzz", 2).is_empty());
    }

    #[test]
    fn test_cosine_score_value() {
        let config = IndexConfig {
            use_levenshtein: false,
            ..Default::default()
        };
        let mut index = FuzzyIndex::with_config(config).unwrap();
        index.insert("france");

        // Query "franc" at size 3 shares 4 of its 5 trigrams with
        // "france" (6 trigrams): 4 / (sqrt(5) * sqrt(6)).
        let candidates = index.cosine_candidates("franc", 3);
        assert_eq!(candidates.len(), 1);
        let expected = 4.0 / (5.0_f64.sqrt() * 6.0_f64.sqrt());
        assert!((candidates[0].score - expected).abs() < 1e-10);
    }

    #[test]
    fn test_falls_back_to_smaller_gram_size() {
        let config = IndexConfig {
            use_levenshtein: false,
            ..Default::default()
        };
        let mut index = FuzzyIndex::with_config(config).unwrap();
        index.insert("ab");

        // "xaby" shares no trigram with "ab" ("-ab", "ab-") but shares
        // the bigram "ab", so only the size-2 pass finds it.
        assert!(index.cosine_candidates("xaby", 3).is_empty());
        let matches = index.query_min_score("xaby", 0.1);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].value, "ab");
    }

    #[test]
    fn test_values_and_contains() {
        let mut index = FuzzyIndex::new();
        index.insert("one");
        index.insert("Two");

        assert!(index.contains("TWO"));
        assert!(!index.contains("three"));

        let mut values = index.values();
        values.sort();
        assert_eq!(values, vec!["Two", "one"]);
    }

    #[test]
    fn test_from_values_skips_duplicates() {
        let index =
            FuzzyIndex::from_values(["a", "b", "A"], IndexConfig::default()).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = IndexConfig {
            gram_size_lower: 5,
            gram_size_upper: 2,
            ..Default::default()
        };
        assert!(FuzzyIndex::with_config(config).is_err());
    }

    #[test]
    fn test_stats_reflect_insertions() {
        let mut index = FuzzyIndex::new();
        assert_eq!(index.stats().num_items, 0);
        index.insert("france");
        index.insert("french");
        let stats = index.stats();
        assert_eq!(stats.num_items, 2);
        assert!(stats.total_postings > 0);
    }
}
