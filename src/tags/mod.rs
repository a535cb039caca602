//! Tag detection module
//!
//! Picks the most relevant tags from a fixed vocabulary for free text.
//!
//! # Components
//!
//! - `pool`: the ordered tag vocabulary and its default contents
//! - `cache`: content-keyed cache of tag embeddings
//! - `detector`: similarity ranking of pool tags against input text

pub mod cache;
pub mod detector;
pub mod pool;

pub use cache::EmbeddingCache;
pub use detector::{TagDetector, TagSuggestion};
pub use pool::{TagPool, DEFAULT_TAG_POOL};
