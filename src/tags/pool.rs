//! Tag pool: the fixed, ordered vocabulary of mood and topic labels
//!
//! Pool order matters: embeddings are batched in this order and equal
//! similarities keep it.

use serde::{Deserialize, Serialize};

/// Default vocabulary, grouped loosely by theme
pub const DEFAULT_TAG_POOL: &[&str] = &[
    // === Emotions ===
    "happiness", "sadness", "peace", "stress", "loneliness", "confidence", "hope", "anger",
    "grief", "anxiety", "fear", "joy", "contentment",
    // === Drive ===
    "motivation", "discipline", "consistency", "self-control", "focus", "purpose", "ambition",
    "resilience", "growth", "habits", "mindset",
    // === Existence ===
    "life", "death", "truth", "meaning", "freedom", "destiny", "acceptance", "regret", "change",
    "choices", "wisdom", "time", "reflection",
    // === Relationships ===
    "love", "compassion", "empathy", "friendship", "family", "connection", "kindness",
    "forgiveness", "trust", "heartbreak",
    // === Work ===
    "money", "business", "success", "leadership", "risk", "entrepreneurship", "opportunity",
    "value", "productivity",
    // === Spirit ===
    "spirituality", "karma", "consciousness", "mindfulness", "humility", "gratitude", "faith",
    "ethics", "balance",
    // === World ===
    "nature", "simplicity", "beauty", "calm", "environment", "animals", "trees", "seasons",
    "universe", "earth", "space",
    // === Vices ===
    "lust", "desire", "greed", "addiction", "ego", "materialism", "envy", "jealousy",
    "temptation",
];

/// Ordered tag vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPool {
    tags: Vec<String>,
}

impl TagPool {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Default for TagPool {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_POOL.iter().copied())
    }
}
