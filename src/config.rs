//! Configuration for the gramdex index.

use crate::error::{GramdexError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`FuzzyIndex`](crate::FuzzyIndex).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Smallest gram size to index and query.
    /// Must be at least 1. Default: 2.
    pub gram_size_lower: usize,

    /// Largest gram size to index and query.
    /// Must be >= `gram_size_lower`. Default: 3.
    pub gram_size_upper: usize,

    /// Re-rank the top cosine candidates by normalized Levenshtein
    /// similarity instead of returning raw cosine scores.
    /// Default: true.
    pub use_levenshtein: bool,

    /// Maximum number of cosine candidates handed to the Levenshtein
    /// refiner. Default: 50.
    pub refine_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            gram_size_lower: 2,
            gram_size_upper: 3,
            use_levenshtein: true,
            refine_limit: 50,
        }
    }
}

impl IndexConfig {
    /// Validates the configuration.
    ///
    /// Fails when `gram_size_lower` is zero or exceeds `gram_size_upper`.
    pub fn validate(&self) -> Result<()> {
        if self.gram_size_lower == 0 {
            return Err(GramdexError::Config(
                "gram_size_lower must be at least 1".to_string(),
            ));
        }
        if self.gram_size_lower > self.gram_size_upper {
            return Err(GramdexError::Config(format!(
                "gram_size_lower ({}) exceeds gram_size_upper ({})",
                self.gram_size_lower, self.gram_size_upper
            )));
        }
        Ok(())
    }

    /// Returns the indexed gram sizes in ascending order.
    #[inline]
    pub fn gram_sizes(&self) -> std::ops::RangeInclusive<usize> {
        self.gram_size_lower..=self.gram_size_upper
    }
}
