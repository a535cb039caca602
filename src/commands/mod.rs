pub mod add;
pub mod detect;
pub mod init;
pub mod rank;
pub mod recommend;
pub mod status;
pub mod tags;

use std::sync::Arc;

use anyhow::{Context, Result};
use quotemood::core::paths::HomePaths;
use quotemood::search::create_embedder;
use quotemood::{QuoteEngine, QuoteStore};

/// Load the embedding model and build an engine from the home config
pub fn load_engine(paths: &HomePaths) -> Result<QuoteEngine> {
    let config = &paths.config;
    let embedder = create_embedder(&config.embedder_config(&paths.root))
        .context("Failed to load embedding model")?;

    Ok(QuoteEngine::new(Arc::from(embedder), config.tag_pool.clone())
        .with_weights(config.ranking.weights)
        .with_detect_top_k(config.ranking.detect_top_k))
}

pub fn open_store(paths: &HomePaths) -> Result<QuoteStore> {
    QuoteStore::open(&paths.quotes)
        .with_context(|| format!("Failed to open quotes: {}", paths.quotes.display()))
}
