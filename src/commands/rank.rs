//! Rank command - rank quotes against text for an explicit tag selection

use anyhow::Result;
use colored::Colorize;

use super::{load_engine, open_store};
use quotemood::core::paths::HomePaths;

pub fn run(text: &str, tags: &[String], limit: Option<i64>, json: bool) -> Result<()> {
    let paths = HomePaths::new();
    let limit = limit.unwrap_or(paths.config.ranking.page_size);
    let engine = load_engine(&paths)?;
    let store = open_store(&paths)?;

    let ranked = engine.rank_scored(text, tags, limit, &store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!(
            "{} No quotes tagged with: {}",
            "→".dimmed(),
            tags.join(", ").cyan()
        );
        return Ok(());
    }

    for (i, quote) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            quote.text.italic(),
            format!(
                "(score {:.3} = semantic {:.3} / tags {:.2})",
                quote.score, quote.semantic, quote.tag_score
            )
            .dimmed()
        );
    }

    Ok(())
}
