//! Tag detector for picking the most relevant pool tags for free text
//!
//! Ranks every tag in the pool by cosine similarity to the input embedding.
//! Tag embeddings are read through a content-keyed cache, so a static pool is
//! embedded once per process and a changed pool only embeds its new tags.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::cache::EmbeddingCache;
use super::pool::TagPool;
use crate::error::{Error, Result};
use crate::search::embedder::{cosine_similarity, Embedder};

/// A detected tag with its similarity score
#[derive(Debug, Clone, Serialize)]
pub struct TagSuggestion {
    pub tag: String,
    pub score: f32,
}

/// Semantic tag detector over an ordered tag pool
pub struct TagDetector {
    embedder: Arc<dyn Embedder>,
    cache: EmbeddingCache,
}

impl TagDetector {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            cache: EmbeddingCache::default(),
        }
    }

    /// Top `top_k` pool tags for `text`, most relevant first.
    ///
    /// `top_k <= 0` yields no tags; a `top_k` past the pool size yields the
    /// whole pool in relevance order.
    pub fn detect_tags(&self, text: &str, pool: &TagPool, top_k: i64) -> Result<Vec<String>> {
        Ok(self
            .detect_scored(text, pool, top_k)?
            .into_iter()
            .map(|s| s.tag)
            .collect())
    }

    /// Same as [`detect_tags`](Self::detect_tags), keeping the similarity scores
    pub fn detect_scored(
        &self,
        text: &str,
        pool: &TagPool,
        top_k: i64,
    ) -> Result<Vec<TagSuggestion>> {
        if top_k <= 0 || pool.is_empty() {
            return Ok(Vec::new());
        }

        let text_embedding = self.embedder.embed(text).map_err(Error::embedding)?;
        let pool_embeddings = self.pool_embeddings(pool)?;

        let mut scored: Vec<(usize, f32)> = pool_embeddings
            .iter()
            .enumerate()
            .map(|(i, emb)| (i, cosine_similarity(&text_embedding, emb)))
            .collect();

        // Stable: equal similarities keep pool order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(usize::try_from(top_k).unwrap_or(usize::MAX));

        let suggestions: Vec<TagSuggestion> = scored
            .into_iter()
            .map(|(i, score)| TagSuggestion {
                tag: pool.tags()[i].clone(),
                score,
            })
            .collect();

        debug!(
            top_k,
            detected = ?suggestions.iter().map(|s| s.tag.as_str()).collect::<Vec<_>>(),
            "Detected tags"
        );

        Ok(suggestions)
    }

    /// Pool embeddings in pool order; only cache misses are embedded
    fn pool_embeddings(&self, pool: &TagPool) -> Result<Vec<Vec<f32>>> {
        let mut embeddings: Vec<Option<Vec<f32>>> =
            pool.tags().iter().map(|tag| self.cache.get(tag)).collect();

        let missing: Vec<usize> = embeddings
            .iter()
            .enumerate()
            .filter(|(_, emb)| emb.is_none())
            .map(|(i, _)| i)
            .collect();

        if !missing.is_empty() {
            let texts: Vec<&str> = missing.iter().map(|&i| pool.tags()[i].as_str()).collect();
            let fresh = self
                .embedder
                .embed_batch(&texts)
                .map_err(Error::embedding)?;
            if fresh.len() != texts.len() {
                return Err(Error::EmbeddingUnavailable(format!(
                    "expected {} tag embeddings, got {}",
                    texts.len(),
                    fresh.len()
                )));
            }

            debug!(embedded = texts.len(), pool = pool.len(), "Embedded tag pool misses");
            for (&i, emb) in missing.iter().zip(fresh) {
                self.cache.insert(&pool.tags()[i], emb.clone());
                embeddings[i] = Some(emb);
            }
        }

        Ok(embeddings.into_iter().flatten().collect())
    }

    pub fn embedder(&self) -> &Arc<dyn Embedder> {
        &self.embedder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::embedder::testing::{FailingEmbedder, KeywordEmbedder, NanEmbedder};
    use std::sync::atomic::Ordering as AtomicOrdering;

    fn detector() -> (Arc<KeywordEmbedder>, TagDetector) {
        let embedder = Arc::new(KeywordEmbedder::moods());
        let detector = TagDetector::new(embedder.clone());
        (embedder, detector)
    }

    fn mood_pool() -> TagPool {
        TagPool::new(["joy", "stress", "calm"])
    }

    #[test]
    fn test_detects_closest_tag() {
        let (_, detector) = detector();
        let tags = detector
            .detect_tags("so much pressure before the deadline", &TagPool::new(["joy", "stress"]), 1)
            .unwrap();
        assert_eq!(tags, vec!["stress"]);
    }

    #[test]
    fn test_orders_by_descending_similarity() {
        let (_, detector) = detector();
        let scored = detector
            .detect_scored("a quiet peace after the stress", &mood_pool(), 3)
            .unwrap();
        let tags: Vec<_> = scored.iter().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["calm", "stress", "joy"]);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let (_, detector) = detector();
        // Nothing matches any axis: every similarity is 0.
        let tags = detector.detect_tags("", &mood_pool(), 3).unwrap();
        assert_eq!(tags, vec!["joy", "stress", "calm"]);
    }

    #[test]
    fn test_top_k_boundaries() {
        let (_, detector) = detector();
        let pool = mood_pool();

        assert!(detector.detect_tags("joy", &pool, 0).unwrap().is_empty());
        assert!(detector.detect_tags("joy", &pool, -3).unwrap().is_empty());

        let all = detector.detect_tags("joy", &pool, 10).unwrap();
        assert_eq!(all.len(), pool.len());
        assert_eq!(all[0], "joy");
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let (embedder, detector) = detector();
        let tags = detector.detect_tags("joy", &TagPool::new(Vec::<String>::new()), 3).unwrap();
        assert!(tags.is_empty());
        assert_eq!(embedder.batch_calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_deterministic() {
        let (_, detector) = detector();
        let pool = TagPool::default();
        let first = detector.detect_tags("smile through the stress", &pool, 6).unwrap();
        let second = detector.detect_tags("smile through the stress", &pool, 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pool_embeddings_cached() {
        let (embedder, detector) = detector();
        let pool = mood_pool();

        detector.detect_tags("joy", &pool, 1).unwrap();
        detector.detect_tags("stress", &pool, 1).unwrap();
        assert_eq!(embedder.batch_calls.load(AtomicOrdering::SeqCst), 1);

        // A subset of cached tags embeds nothing new.
        detector.detect_tags("joy", &TagPool::new(["joy", "stress"]), 1).unwrap();
        assert_eq!(embedder.batch_calls.load(AtomicOrdering::SeqCst), 1);

        // A new tag triggers one batch for the miss only.
        let tags = detector
            .detect_tags("laugh", &TagPool::new(["stress", "happy", "joy"]), 3)
            .unwrap();
        assert_eq!(embedder.batch_calls.load(AtomicOrdering::SeqCst), 2);
        assert_eq!(tags, vec!["happy", "joy", "stress"]);
    }

    #[test]
    fn test_reordered_pool_uses_matching_embeddings() {
        let (_, detector) = detector();
        detector.detect_tags("warm up", &mood_pool(), 3).unwrap();

        let reordered = TagPool::new(["calm", "stress", "joy"]);
        let scored = detector
            .detect_scored("deadline pressure", &reordered, 3)
            .unwrap();
        assert_eq!(scored[0].tag, "stress");
        assert!((scored[0].score - 1.0).abs() < 1e-6);
        // Remaining zero-similarity tags keep the new pool order.
        assert_eq!(scored[1].tag, "calm");
        assert_eq!(scored[2].tag, "joy");
    }

    #[test]
    fn test_nan_embeddings_do_not_break_ordering() {
        let detector = TagDetector::new(Arc::new(NanEmbedder));
        let pool = TagPool::new(["joy", "nan", "stress"]);
        let tags = detector.detect_tags("joy", &pool, 3).unwrap();
        assert_eq!(tags, vec!["joy", "nan", "stress"]);
    }

    #[test]
    fn test_embedder_failure_surfaces() {
        let detector = TagDetector::new(Arc::new(FailingEmbedder));
        let err = detector.detect_tags("joy", &mood_pool(), 1).unwrap_err();
        assert!(matches!(err, Error::EmbeddingUnavailable(_)));
    }
}
