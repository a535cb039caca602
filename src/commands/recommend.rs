//! Recommend command - detect moods, then show a page of matching quotes

use anyhow::{bail, Result};
use colored::Colorize;

use super::{load_engine, open_store};
use quotemood::core::paths::HomePaths;

pub fn run(text: &str, page: i64, scores: bool, json: bool) -> Result<()> {
    if page < 1 {
        bail!("--page starts at 1, got {}", page);
    }

    let paths = HomePaths::new();
    let count = page.saturating_mul(paths.config.ranking.page_size);
    let engine = load_engine(&paths)?;
    let store = open_store(&paths)?;

    let rec = engine.recommend(text, count, &store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!("{}", "Detected Moods".bold());
    let tags: Vec<&str> = rec.tags.iter().map(|t| t.tag.as_str()).collect();
    println!("  {}", tags.join(", ").cyan());
    println!();

    println!("{}", "Recommended Quotes".bold());
    if rec.quotes.is_empty() {
        println!("  {} No quotes match these moods yet", "→".dimmed());
        return Ok(());
    }

    for (i, quote) in rec.quotes.iter().enumerate() {
        print!("  {}. {}", i + 1, quote.text.italic());
        if scores {
            print!("  {}", format!("[{:.3}]", quote.score).dimmed());
        }
        println!();
    }
    println!();

    if rec.has_more {
        println!(
            "{} More may match: {}",
            "→".dimmed(),
            format!("--page {}", page + 1).cyan()
        );
    } else {
        println!("{} All matching quotes shown.", "✓".green());
    }

    Ok(())
}
