//! N-gram extraction over gram-space strings.

use crate::text::simplify;
use std::collections::HashMap;

/// Boundary marker padded onto both ends of a string before windowing.
const BOUNDARY: char = '-';

/// Extracts every n-gram of `gram_size` characters from `value`.
///
/// The value is simplified into gram space, wrapped with one boundary
/// marker on each side, and right-padded with markers until it is at
/// least `gram_size` characters long, so even the empty string yields
/// one gram. Windows slide one character at a time; duplicates are
/// preserved in left-to-right order.
pub fn iterate_grams(value: &str, gram_size: usize) -> Vec<String> {
    debug_assert!(gram_size >= 1);

    let simplified = simplify(value);
    let mut padded: Vec<char> = Vec::with_capacity(simplified.chars().count() + 2);
    padded.push(BOUNDARY);
    padded.extend(simplified.chars());
    padded.push(BOUNDARY);
    while padded.len() < gram_size {
        padded.push(BOUNDARY);
    }

    padded
        .windows(gram_size)
        .map(|window| window.iter().collect())
        .collect()
}

/// Builds the n-gram frequency histogram of `value` at `gram_size`.
pub fn gram_counts(value: &str, gram_size: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for gram in iterate_grams(value, gram_size) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}
