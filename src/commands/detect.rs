//! Detect command - most relevant pool tags for free text

use anyhow::Result;
use colored::Colorize;

use super::load_engine;
use quotemood::core::paths::HomePaths;

pub fn run(text: &str, limit: Option<i64>, json: bool) -> Result<()> {
    let paths = HomePaths::new();
    let limit = limit.unwrap_or(paths.config.ranking.detect_top_k);
    let engine = load_engine(&paths)?;

    let tags = engine.detect_scored(text, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("{} No tags detected", "→".dimmed());
        return Ok(());
    }

    println!("{}", "Detected Moods".bold());
    println!("{}", "-".repeat(40));
    for suggestion in &tags {
        println!(
            "  {:<20} {}",
            suggestion.tag.cyan(),
            format!("{:.3}", suggestion.score).dimmed()
        );
    }

    Ok(())
}
