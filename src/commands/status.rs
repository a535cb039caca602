use anyhow::Result;
use colored::*;
use serde::Serialize;

use super::open_store;
use quotemood::core::paths::HomePaths;
use quotemood::core::stats::CorpusStats;

const TOP_TAGS: usize = 10;

#[derive(Serialize)]
struct CorpusStatus {
    quotes_file: String,
    pool_size: usize,
    model: String,
    #[serde(flatten)]
    stats: CorpusStats,
}

pub fn run(json: bool) -> Result<()> {
    let paths = HomePaths::new();
    let store = open_store(&paths)?;
    let pool = &paths.config.tag_pool;

    let status = CorpusStatus {
        quotes_file: paths.quotes.display().to_string(),
        pool_size: pool.len(),
        model: paths
            .config
            .model
            .model_path
            .clone()
            .unwrap_or_else(|| paths.config.model.model_id.clone()),
        stats: CorpusStats::collect(store.quotes(), pool),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_report(&status);
    }

    Ok(())
}

fn print_report(status: &CorpusStatus) {
    let stats = &status.stats;
    println!("{}", "Quote Corpus Status".bold());
    println!("{}", "=".repeat(60));
    println!();
    println!("Quotes file: {}", status.quotes_file);
    println!("Model: {}", status.model);
    println!("Total quotes: {}", stats.total_quotes);
    println!("Untagged quotes: {}", stats.untagged_quotes);
    println!("Tag pool: {} tags", status.pool_size);
    println!();

    if !stats.tag_usage.is_empty() {
        println!("{}", "Most used tags:".cyan().bold());
        for usage in stats.tag_usage.iter().take(TOP_TAGS) {
            println!("  {:>4} × {}", usage.count, usage.tag);
        }
        println!();
    }

    if !stats.unused_pool_tags.is_empty() {
        println!(
            "{} {} pool tags have no quotes yet",
            "→".dimmed(),
            stats.unused_pool_tags.len()
        );
    }

    if !stats.unknown_tags.is_empty() {
        println!(
            "{}",
            format!(
                "⚠️  Tags outside the pool (never detected): {}",
                stats.unknown_tags.join(", ")
            )
            .yellow()
        );
    }
}
