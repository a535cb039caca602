use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quote and the tags it is filed under.
///
/// Identity is by content. Tags are not checked against the tag pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Set for quotes added through the admin flow; seeded quotes have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn new<I, S>(text: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            added_at: None,
        }
    }

    pub fn added_now(mut self) -> Self {
        self.added_at = Some(Utc::now());
        self
    }

    /// Number of distinct quote tags that appear in `selected`
    pub fn overlap(&self, selected: &HashSet<&str>) -> usize {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|t| selected.contains(t))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn shares_tag(&self, selected: &HashSet<&str>) -> bool {
        self.tags.iter().any(|t| selected.contains(t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_counts_distinct_tags() {
        let quote = Quote::new("Breathe.", ["stress", "calm", "stress"]);
        let selected: HashSet<&str> = ["stress", "calm", "joy"].into_iter().collect();
        assert_eq!(quote.overlap(&selected), 2);
        assert!(quote.shares_tag(&selected));
    }

    #[test]
    fn test_no_shared_tag() {
        let quote = Quote::new("Smile.", ["joy"]);
        let selected: HashSet<&str> = ["stress"].into_iter().collect();
        assert_eq!(quote.overlap(&selected), 0);
        assert!(!quote.shares_tag(&selected));
    }

    #[test]
    fn test_json_uses_quote_key() {
        let json = r#"{"quote": "Breathe.", "tags": ["stress"]}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.text, "Breathe.");
        assert_eq!(quote.tags, vec!["stress"]);
        assert!(quote.added_at.is_none());

        let out = serde_json::to_string(&quote).unwrap();
        assert_eq!(out, r#"{"quote":"Breathe.","tags":["stress"]}"#);
    }

    #[test]
    fn test_missing_tags_default_empty() {
        let quote: Quote = serde_json::from_str(r#"{"quote": "Hm."}"#).unwrap();
        assert!(quote.tags.is_empty());
    }

    #[test]
    fn test_added_at_round_trips() {
        let quote = Quote::new("Breathe.", ["stress"]).added_now();
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"added_at\":"));

        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back.added_at, quote.added_at);
    }
}
