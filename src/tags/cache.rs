//! In-memory tag embedding cache using moka.
//!
//! Keys are blake3 hashes of the tag text, so a tag keeps its embedding
//! across pool reorderings and pool changes only embed the new tags.

use moka::sync::Cache;

/// Enough for several full vocabularies
pub const DEFAULT_CACHE_ENTRIES: u64 = 4096;

/// Content key for an embedded text
pub fn content_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Tag embedding cache keyed by content hash
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self { cache }
    }

    /// Get an embedding by the text it was computed from
    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&content_key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(content_key(text), embedding);
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }
}
