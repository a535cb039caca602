//! Corpus statistics: tag usage against the configured pool

use serde::Serialize;
use std::collections::HashMap;

use super::quote::Quote;
use crate::tags::TagPool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
}

/// Tag usage summary of a corpus
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub total_quotes: usize,
    pub untagged_quotes: usize,
    /// Most used first; equal counts in tag order
    pub tag_usage: Vec<TagUsage>,
    /// Pool tags no quote carries, in pool order
    pub unused_pool_tags: Vec<String>,
    /// Quote tags missing from the pool, sorted
    pub unknown_tags: Vec<String>,
}

impl CorpusStats {
    pub fn collect(quotes: &[Quote], pool: &TagPool) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut untagged_quotes = 0;
        for quote in quotes {
            if quote.tags.is_empty() {
                untagged_quotes += 1;
            }
            for tag in &quote.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut tag_usage: Vec<TagUsage> = counts
            .iter()
            .map(|(tag, count)| TagUsage {
                tag: tag.to_string(),
                count: *count,
            })
            .collect();
        tag_usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        let unused_pool_tags = pool
            .tags()
            .iter()
            .filter(|t| !counts.contains_key(t.as_str()))
            .cloned()
            .collect();

        let mut unknown_tags: Vec<String> = counts
            .keys()
            .filter(|t| !pool.contains(t))
            .map(|t| t.to_string())
            .collect();
        unknown_tags.sort();

        Self {
            total_quotes: quotes.len(),
            untagged_quotes,
            tag_usage,
            unused_pool_tags,
            unknown_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(tag: &str, count: usize) -> TagUsage {
        TagUsage {
            tag: tag.to_string(),
            count,
        }
    }

    #[test]
    fn test_tag_usage_orders_by_count_then_tag() {
        let quotes = vec![
            Quote::new("A", ["stress", "joy"]),
            Quote::new("B", ["stress"]),
            Quote::new("C", ["calm"]),
        ];
        let stats = CorpusStats::collect(&quotes, &TagPool::new(["joy", "stress", "calm"]));
        assert_eq!(
            stats.tag_usage,
            vec![usage("stress", 2), usage("calm", 1), usage("joy", 1)]
        );
        assert_eq!(stats.total_quotes, 3);
    }

    #[test]
    fn test_unused_pool_tags_keep_pool_order() {
        let quotes = vec![Quote::new("A", ["hope"])];
        let pool = TagPool::new(["stress", "hope", "calm", "anger"]);
        let stats = CorpusStats::collect(&quotes, &pool);
        assert_eq!(stats.unused_pool_tags, vec!["stress", "calm", "anger"]);
    }

    #[test]
    fn test_unknown_tags_sorted_and_deduplicated() {
        let quotes = vec![
            Quote::new("A", ["zen", "joy"]),
            Quote::new("B", ["Joy", "zen"]),
            Quote::new("C", ["awe"]),
        ];
        let stats = CorpusStats::collect(&quotes, &TagPool::new(["joy"]));
        // Pool lookup is case-sensitive, so "Joy" is unknown.
        assert_eq!(stats.unknown_tags, vec!["Joy", "awe", "zen"]);
        assert!(stats.unused_pool_tags.is_empty());
    }

    #[test]
    fn test_untagged_quotes_counted() {
        let quotes = vec![
            Quote::new("A", Vec::<String>::new()),
            Quote::new("B", ["joy"]),
            Quote::new("C", Vec::<String>::new()),
        ];
        let stats = CorpusStats::collect(&quotes, &TagPool::new(["joy"]));
        assert_eq!(stats.untagged_quotes, 2);
        assert_eq!(stats.tag_usage, vec![usage("joy", 1)]);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = CorpusStats::collect(&[], &TagPool::new(["joy", "calm"]));
        assert_eq!(stats.total_quotes, 0);
        assert!(stats.tag_usage.is_empty());
        assert!(stats.unknown_tags.is_empty());
        assert_eq!(stats.unused_pool_tags, vec!["joy", "calm"]);
    }
}
