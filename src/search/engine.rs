//! Quote engine - tag detection, ranking and the admin add flow over one embedder
//!
//! The corpus is not owned by the engine: every read or append takes the
//! caller's [`QuoteStore`], so independent corpora can share one model.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::embedder::Embedder;
use super::ranker::{QuoteRanker, RankedQuote, ScoreWeights};
use crate::core::quote::Quote;
use crate::core::store::QuoteStore;
use crate::error::{Error, Result};
use crate::tags::{TagDetector, TagPool, TagSuggestion};

/// Tags detected per query and per newly added quote
pub const DEFAULT_DETECT_TOP_K: i64 = 6;

/// One page of recommendations
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tags: Vec<TagSuggestion>,
    pub quotes: Vec<RankedQuote>,
    /// The page came back full, so a larger request may find more
    pub has_more: bool,
}

pub struct QuoteEngine {
    pool: TagPool,
    detector: TagDetector,
    ranker: QuoteRanker,
    detect_top_k: i64,
}

impl QuoteEngine {
    pub fn new(embedder: Arc<dyn Embedder>, pool: TagPool) -> Self {
        Self {
            pool,
            detector: TagDetector::new(Arc::clone(&embedder)),
            ranker: QuoteRanker::new(embedder),
            detect_top_k: DEFAULT_DETECT_TOP_K,
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.ranker = self.ranker.with_weights(weights);
        self
    }

    pub fn with_detect_top_k(mut self, detect_top_k: i64) -> Self {
        self.detect_top_k = detect_top_k;
        self
    }

    pub fn pool(&self) -> &TagPool {
        &self.pool
    }

    pub fn embedder_name(&self) -> &str {
        self.detector.embedder().name()
    }

    /// Most relevant pool tags for `text`
    pub fn detect_tags(&self, text: &str, top_k: i64) -> Result<Vec<String>> {
        self.detector.detect_tags(text, &self.pool, top_k)
    }

    pub fn detect_scored(&self, text: &str, top_k: i64) -> Result<Vec<TagSuggestion>> {
        self.detector.detect_scored(text, &self.pool, top_k)
    }

    /// Quote texts from `store` ranked against `text`, filtered by `tags`
    pub fn rank_quotes<S: AsRef<str>>(
        &self,
        text: &str,
        tags: &[S],
        top_k: i64,
        store: &QuoteStore,
    ) -> Result<Vec<String>> {
        self.ranker.rank_quotes(text, tags, store.quotes(), top_k)
    }

    pub fn rank_scored<S: AsRef<str>>(
        &self,
        text: &str,
        tags: &[S],
        top_k: i64,
        store: &QuoteStore,
    ) -> Result<Vec<RankedQuote>> {
        self.ranker.rank_scored(text, tags, store.quotes(), top_k)
    }

    /// Detect tags for `text`, then rank the first `count` quotes.
    ///
    /// Callers page by re-asking with a larger `count`; earlier results stay a
    /// prefix of later ones.
    pub fn recommend(&self, text: &str, count: i64, store: &QuoteStore) -> Result<Recommendation> {
        let tags = self.detect_scored(text, self.detect_top_k)?;
        if tags.is_empty() {
            return Ok(Recommendation {
                tags,
                quotes: Vec::new(),
                has_more: false,
            });
        }

        let names: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        let quotes = self.ranker.rank_scored(text, &names, store.quotes(), count)?;
        let has_more = count > 0 && quotes.len() as i64 == count;

        Ok(Recommendation {
            tags,
            quotes,
            has_more,
        })
    }

    /// Auto-tag `text` against the pool and append it to `store`.
    ///
    /// Detected tags are re-checked against the pool before storage.
    pub fn add_quote(&self, text: &str, store: &mut QuoteStore) -> Result<Quote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidArgument("quote text is empty".to_string()));
        }

        let mut tags = self.detect_tags(text, self.detect_top_k)?;
        tags.retain(|tag| {
            let known = self.pool.contains(tag);
            if !known {
                warn!(tag = %tag, "Dropping detected tag outside the pool");
            }
            known
        });

        let quote = Quote::new(text, tags).added_now();
        store.append(quote.clone())?;
        info!(tags = ?quote.tags, corpus = store.len(), "Added quote");

        Ok(quote)
    }
}
