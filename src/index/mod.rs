//! N-gram postings storage and the fuzzy index built on top of it.

mod fuzzy;
mod postings;

pub use fuzzy::{FuzzyIndex, Match};
pub use postings::{GramTable, IndexStats};
