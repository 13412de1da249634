//! Levenshtein edit distance and its normalized similarity.

use crate::similarity::SimilarityMeasure;

/// Normalized Levenshtein similarity.
///
/// `similarity = 1 - distance / max(len_a, len_b)`, which unit-cost edit
/// distance keeps inside `[0, 1]`. Two empty strings are identical (1.0).
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Levenshtein {
    /// Computes the unit-cost edit distance between `a` and `b`.
    ///
    /// Single-row dynamic programming over characters: O(|a| * |b|) time,
    /// one row of auxiliary space.
    pub fn edit_distance(a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        if a_chars.is_empty() {
            return b_chars.len();
        }
        if b_chars.is_empty() {
            return a_chars.len();
        }

        // Keep the row as short as the shorter string.
        let (outer, inner) = if a_chars.len() >= b_chars.len() {
            (&a_chars, &b_chars)
        } else {
            (&b_chars, &a_chars)
        };

        let mut row: Vec<usize> = (0..=inner.len()).collect();
        for (i, oc) in outer.iter().enumerate() {
            let mut previous_diagonal = row[0];
            row[0] = i + 1;
            for (j, ic) in inner.iter().enumerate() {
                let substitution = if oc == ic {
                    previous_diagonal
                } else {
                    previous_diagonal + 1
                };
                previous_diagonal = row[j + 1];
                row[j + 1] = substitution.min(row[j] + 1).min(previous_diagonal + 1);
            }
        }
        row[inner.len()]
    }
}

impl SimilarityMeasure for Levenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let longer = a.chars().count().max(b.chars().count());
        if longer == 0 {
            return 1.0;
        }
        1.0 - Levenshtein::edit_distance(a, b) as f64 / longer as f64
    }
}
