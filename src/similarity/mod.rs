//! String similarity measures used by the retrieval pipeline.

mod levenshtein;

pub use levenshtein::Levenshtein;

/// Trait for pairwise string similarity measures.
pub trait SimilarityMeasure {
    /// Computes the similarity between two strings.
    ///
    /// Returns a value between 0.0 (completely different) and 1.0
    /// (identical).
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Computes the distance between two strings.
    ///
    /// Default implementation: 1.0 - similarity.
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }
}
