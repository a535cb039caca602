//! Add command - admin-only quote submission with automatic tagging

use anyhow::{bail, Result};
use colored::Colorize;

use super::{load_engine, open_store};
use quotemood::core::auth::{is_admin, ADMIN_EMAIL_ENV, ADMIN_PASSWORD_ENV};
use quotemood::core::paths::HomePaths;

pub fn run(quote: &str, email: &str, password: &str, json: bool) -> Result<()> {
    if !is_admin(email, password) {
        bail!(
            "Invalid admin credentials (set {} and {})",
            ADMIN_EMAIL_ENV,
            ADMIN_PASSWORD_ENV
        );
    }

    if quote.trim().is_empty() {
        bail!("Please enter a quote");
    }

    let paths = HomePaths::new();
    let engine = load_engine(&paths)?;
    let mut store = open_store(&paths)?;

    let added = engine.add_quote(quote, &mut store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&added)?);
    } else {
        println!(
            "{} Quote added with tags: {}",
            "✓".green(),
            added.tags.join(", ").cyan()
        );
        println!("  {} quotes in {}", store.len(), paths.quotes.display());
    }

    Ok(())
}
