//! Text processing module for normalization and n-gram extraction.

mod grams;
mod normalizer;

pub use grams::{gram_counts, iterate_grams};
pub use normalizer::{normalize, simplify};
