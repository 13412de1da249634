//! # Gramdex - Approximate String Matching Index
//!
//! Gramdex is an in-memory index answering "which stored strings most
//! resemble this query?", ranked by similarity. It is an embeddable
//! component for autocomplete, typo-tolerant lookup, and deduplication
//! candidate generation - not a standalone service.
//!
//! ## Overview
//!
//! Every inserted string is decomposed into overlapping n-grams at a
//! range of gram sizes and stored as sparse frequency vectors behind
//! postings lists. Retrieval checks for an exact (case-insensitive) hit
//! first, then scores candidates by cosine similarity over shared
//! grams, trying the largest gram size first and falling back to
//! smaller sizes until something matches. Optionally the top candidates
//! are re-ranked by normalized Levenshtein similarity.
//!
//! ## Quick Start
//!
//! ```rust
//! use gramdex::FuzzyIndex;
//!
//! let mut index = FuzzyIndex::new();
//! index.insert("France");
//! index.insert("French");
//! index.insert("frenchy");
//!
//! // Approximate lookup, best match first.
//! let matches = index.query("franc");
//! assert_eq!(matches[0].value, "France");
//!
//! // Exact hits short-circuit with score 1.0.
//! let exact = index.query("FRANCE");
//! assert_eq!(exact[0].score, 1.0);
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Normalization and n-gram extraction
//! - [`index`] - Postings storage and the [`FuzzyIndex`] itself
//! - [`similarity`] - Levenshtein refinement behind the
//!   [`SimilarityMeasure`] trait
//!
//! ## Normalization Asymmetry
//!
//! Exact-match keys are lowercased only, while gram extraction
//! additionally strips punctuation and symbols. `"U.S.A."` therefore
//! only matches exactly when queried with its punctuation, yet scores
//! against `"usa"` in the fuzzy stage. This asymmetry is intentional;
//! see [`text::normalize`] and [`text::simplify`].
//!
//! The index is single-threaded: no locks, no I/O, no suspension
//! points. Wrap it yourself if you need shared mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod index;
pub mod similarity;
pub mod text;

// Re-export commonly used types
pub use config::IndexConfig;
pub use error::{GramdexError, Result};
pub use index::{FuzzyIndex, IndexStats, Match};
pub use similarity::{Levenshtein, SimilarityMeasure};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default smallest indexed gram size.
pub const DEFAULT_GRAM_SIZE_LOWER: usize = 2;

/// Default largest indexed gram size.
pub const DEFAULT_GRAM_SIZE_UPPER: usize = 3;

/// Default minimum score a match must reach to be returned.
pub const DEFAULT_MIN_SCORE: f64 = 0.33;
