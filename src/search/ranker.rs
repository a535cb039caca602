//! Quote ranker - tag filtering followed by a blended semantic + tag score
//!
//! ```text
//! final = semantic_weight * cos(input, quote) + tag_weight * |quote.tags ∩ selected| / |selected|
//! ```
//!
//! The tag fraction divides by the size of the selected set, not the quote's
//! own tag count.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::embedder::{cosine_similarity, Embedder};
use crate::core::quote::Quote;
use crate::error::{Error, Result};

/// Weights for blending the two score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_semantic_weight")]
    pub semantic: f64,
    #[serde(default = "default_tag_weight")]
    pub tag: f64,
}

fn default_semantic_weight() -> f64 {
    0.7
}

fn default_tag_weight() -> f64 {
    0.3
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            semantic: default_semantic_weight(),
            tag: default_tag_weight(),
        }
    }
}

impl ScoreWeights {
    pub fn blend(&self, semantic: f32, tag_score: f64) -> f64 {
        self.semantic * f64::from(semantic) + self.tag * tag_score
    }
}

/// A ranked quote with its score breakdown
#[derive(Debug, Clone, Serialize)]
pub struct RankedQuote {
    pub text: String,
    pub tags: Vec<String>,
    pub semantic: f32,
    pub tag_score: f64,
    pub score: f64,
}

/// Ranks a tag-filtered corpus against input text
pub struct QuoteRanker {
    embedder: Arc<dyn Embedder>,
    weights: ScoreWeights,
}

impl QuoteRanker {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Top `top_k` quote texts for `text`, best first.
    ///
    /// Quotes sharing no tag with `selected_tags` are never returned. Results
    /// for a smaller `top_k` are always a prefix of those for a larger one.
    pub fn rank_quotes<S: AsRef<str>>(
        &self,
        text: &str,
        selected_tags: &[S],
        corpus: &[Quote],
        top_k: i64,
    ) -> Result<Vec<String>> {
        Ok(self
            .rank_scored(text, selected_tags, corpus, top_k)?
            .into_iter()
            .map(|r| r.text)
            .collect())
    }

    /// Same as [`rank_quotes`](Self::rank_quotes), keeping the score breakdown
    pub fn rank_scored<S: AsRef<str>>(
        &self,
        text: &str,
        selected_tags: &[S],
        corpus: &[Quote],
        top_k: i64,
    ) -> Result<Vec<RankedQuote>> {
        let selected: HashSet<&str> = selected_tags.iter().map(AsRef::as_ref).collect();
        if selected.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one tag must be selected".to_string(),
            ));
        }
        let limit = usize::try_from(top_k)
            .map_err(|_| Error::InvalidArgument(format!("top_k must not be negative: {}", top_k)))?;

        let filtered: Vec<&Quote> = corpus.iter().filter(|q| q.shares_tag(&selected)).collect();
        if filtered.is_empty() || limit == 0 {
            debug!(candidates = filtered.len(), limit, "Nothing to rank");
            return Ok(Vec::new());
        }

        let input_embedding = self.embedder.embed(text).map_err(Error::embedding)?;
        let texts: Vec<&str> = filtered.iter().map(|q| q.text.as_str()).collect();
        let quote_embeddings = self
            .embedder
            .embed_batch(&texts)
            .map_err(Error::embedding)?;
        if quote_embeddings.len() != filtered.len() {
            return Err(Error::EmbeddingUnavailable(format!(
                "expected {} quote embeddings, got {}",
                filtered.len(),
                quote_embeddings.len()
            )));
        }

        let denominator = selected.len() as f64;
        let mut ranked: Vec<RankedQuote> = filtered
            .iter()
            .zip(quote_embeddings.iter())
            .map(|(quote, emb)| {
                let semantic = cosine_similarity(&input_embedding, emb);
                let tag_score = quote.overlap(&selected) as f64 / denominator;
                RankedQuote {
                    text: quote.text.clone(),
                    tags: quote.tags.clone(),
                    semantic,
                    tag_score,
                    score: self.weights.blend(semantic, tag_score),
                }
            })
            .collect();

        // Descending by (score, text): exact score ties go to the larger text.
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.text.cmp(&a.text))
        });
        ranked.truncate(limit);

        debug!(
            candidates = filtered.len(),
            returned = ranked.len(),
            "Ranked quotes"
        );

        Ok(ranked)
    }
}
