//! Quote search
//!
//! Embedding abstraction, blended quote ranking and the engine that ties
//! tag detection and ranking together.

pub mod embedder;
pub mod engine;
pub mod ranker;

pub use embedder::{
    cosine_similarity, create_embedder, Embedder, EmbedderConfig, Model2VecEmbedder,
};
pub use engine::{QuoteEngine, Recommendation};
pub use ranker::{QuoteRanker, RankedQuote, ScoreWeights};
