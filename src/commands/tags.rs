//! Tags command - list the configured tag pool

use anyhow::Result;
use colored::Colorize;

use quotemood::core::paths::HomePaths;

pub fn run(json: bool) -> Result<()> {
    let paths = HomePaths::new();
    let pool = &paths.config.tag_pool;

    if json {
        println!("{}", serde_json::to_string_pretty(pool)?);
        return Ok(());
    }

    println!("{} ({} tags)", "Tag Pool".bold(), pool.len());
    println!("{}", "-".repeat(60));
    for chunk in pool.tags().chunks(6) {
        println!("  {}", chunk.join(", "));
    }

    Ok(())
}
