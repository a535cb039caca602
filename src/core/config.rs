//! quotemood configuration module
//!
//! Loaded from `.quotemood.json` in the home directory. Every field has a
//! default, so a partial file or no file at all is valid.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::search::embedder::{EmbedderConfig, DEFAULT_MODEL_ID};
use crate::search::engine::DEFAULT_DETECT_TOP_K;
use crate::search::ranker::ScoreWeights;
use crate::tags::TagPool;

pub const CONFIG_FILE_NAME: &str = ".quotemood.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_quotes_file")]
    pub quotes_file: String,

    #[serde(default)]
    pub tag_pool: TagPool,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub ranking: RankingConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_quotes_file() -> String {
    "quotes.json".to_string()
}

/// Embedding model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_id", rename = "modelId")]
    pub model_id: String,

    /// Local model directory; relative paths resolve against the home directory
    #[serde(default, rename = "modelPath")]
    pub model_path: Option<String>,
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            model_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_detect_top_k", rename = "detectTopK")]
    pub detect_top_k: i64,

    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: i64,

    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_detect_top_k() -> i64 {
    DEFAULT_DETECT_TOP_K
}

fn default_page_size() -> i64 {
    5
}

impl RankingConfig {
    /// Page size and detection depth must both be at least 1
    pub fn validate(&self) -> Result<()> {
        if self.page_size < 1 {
            anyhow::bail!("pageSize must be at least 1, got {}", self.page_size);
        }
        if self.detect_top_k < 1 {
            anyhow::bail!("detectTopK must be at least 1, got {}", self.detect_top_k);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            detect_top_k: default_detect_top_k(),
            page_size: default_page_size(),
            weights: ScoreWeights::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            quotes_file: default_quotes_file(),
            tag_pool: TagPool::default(),
            model: ModelConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => {
                if config.version > CONFIG_VERSION {
                    warn!(
                        version = config.version,
                        supported = CONFIG_VERSION,
                        "Config version is newer than supported"
                    );
                }
                config
            }
            Err(e) => {
                warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Failed to load config, using defaults"
                );
                Self::default()
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.ranking.validate()?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get resolved paths based on the home directory
    pub fn resolve_paths(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            root: root.to_path_buf(),
            config: root.join(CONFIG_FILE_NAME),
            quotes: root.join(&self.quotes_file),
        }
    }

    /// Embedder selection with the model path resolved against `root`
    pub fn embedder_config(&self, root: &Path) -> EmbedderConfig {
        EmbedderConfig {
            model_id: self.model.model_id.clone(),
            model_path: self.model.model_path.as_ref().map(|p| {
                let path = Path::new(p);
                if path.is_absolute() {
                    p.clone()
                } else {
                    root.join(path).to_string_lossy().to_string()
                }
            }),
        }
    }
}

/// Resolved absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub config: PathBuf,
    pub quotes: PathBuf,
}
