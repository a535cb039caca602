//! Context-aware quote recommendations
//!
//! Free text is matched to a fixed tag vocabulary by embedding similarity,
//! then a tag-filtered quote corpus is ranked by a blend of semantic
//! similarity and tag overlap.
//!
//! ```ignore
//! use std::sync::Arc;
//! use quotemood::{QuoteEngine, QuoteStore, TagPool, Model2VecEmbedder};
//!
//! let embedder = Arc::new(Model2VecEmbedder::from_pretrained("minishlab/potion-base-8M")?);
//! let engine = QuoteEngine::new(embedder, TagPool::default());
//! let store = QuoteStore::open("quotes.json".as_ref())?;
//!
//! let tags = engine.detect_tags("I can't keep up at work", 6)?;
//! let quotes = engine.rank_quotes("I can't keep up at work", &tags, 5, &store)?;
//! ```

pub mod core;
pub mod error;
pub mod search;
pub mod tags;

pub use crate::core::quote::Quote;
pub use crate::core::store::QuoteStore;
pub use error::{Error, Result};
pub use search::{
    Embedder, Model2VecEmbedder, QuoteEngine, QuoteRanker, RankedQuote, Recommendation,
    ScoreWeights,
};
pub use tags::{TagDetector, TagPool, TagSuggestion};
