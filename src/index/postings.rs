//! Postings lists and per-gram-size item vector tables.

use crate::text::gram_counts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in a postings list: an item index and how often the gram
/// occurs in that item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Posting {
    /// Index into the vector table for this gram's size.
    pub item: u32,
    /// Occurrences of the gram in the item.
    pub count: u32,
}

/// An indexed item at one gram size: the Euclidean norm of its n-gram
/// frequency vector and the normalized string it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VectorEntry {
    /// Euclidean norm of the item's gram frequency vector.
    pub norm: f64,
    /// The lowercase-normalized string.
    pub normalized: String,
}

/// Sparse n-gram vector storage shared across gram sizes.
///
/// Postings lists are keyed by the gram itself; since every gram stored
/// at size `n` is exactly `n` characters long, the gram's own length
/// selects which vector table its postings refer into. Item indices are
/// dense and append-only per gram size, which is valid only because
/// entries are never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GramTable {
    /// Maps gram -> postings list, shared across all gram sizes.
    postings: HashMap<String, Vec<Posting>>,
    /// Maps gram size -> item index -> vector entry.
    vectors: HashMap<usize, Vec<VectorEntry>>,
}

impl GramTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `normalized` at one gram size and returns its item index.
    ///
    /// Appends a posting for each distinct gram and stores the vector
    /// norm `sqrt(sum of count^2)` alongside the normalized string.
    pub(crate) fn index_item(&mut self, normalized: &str, gram_size: usize) -> u32 {
        let table = self.vectors.entry(gram_size).or_default();
        let item = table.len() as u32;

        let mut sum_of_squares = 0.0;
        for (gram, count) in gram_counts(normalized, gram_size) {
            sum_of_squares += (count * count) as f64;
            self.postings.entry(gram).or_default().push(Posting {
                item,
                count: count as u32,
            });
        }

        table.push(VectorEntry {
            norm: sum_of_squares.sqrt(),
            normalized: normalized.to_string(),
        });
        item
    }

    /// Returns the postings list for `gram`, if any item contains it.
    pub(crate) fn postings(&self, gram: &str) -> Option<&[Posting]> {
        self.postings.get(gram).map(Vec::as_slice)
    }

    /// Returns the vector entry for `item` at `gram_size`.
    pub(crate) fn entry(&self, gram_size: usize, item: u32) -> Option<&VectorEntry> {
        self.vectors.get(&gram_size)?.get(item as usize)
    }

    /// Number of items indexed at `gram_size`.
    pub(crate) fn items_at(&self, gram_size: usize) -> usize {
        self.vectors.get(&gram_size).map_or(0, Vec::len)
    }

    /// Returns statistics over the stored postings.
    pub fn stats(&self) -> IndexStats {
        let total_postings: usize = self.postings.values().map(Vec::len).sum();
        let max_list_size = self.postings.values().map(Vec::len).max().unwrap_or(0);
        let avg_list_size = if self.postings.is_empty() {
            0.0
        } else {
            total_postings as f64 / self.postings.len() as f64
        };

        IndexStats {
            num_items: self.vectors.values().map(Vec::len).max().unwrap_or(0),
            num_grams: self.postings.len(),
            total_postings,
            max_list_size,
            avg_list_size,
        }
    }
}

/// Statistics about the gram storage.
#[derive(Debug, Clone)]
pub struct IndexStats {
    /// Number of indexed items.
    pub num_items: usize,
    /// Number of distinct grams across all sizes.
    pub num_grams: usize,
    /// Total number of (gram, item) postings.
    pub total_postings: usize,
    /// Size of the largest postings list.
    pub max_list_size: usize,
    /// Average postings list size.
    pub avg_list_size: f64,
}
