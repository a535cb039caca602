//! Embedder trait and the Model2Vec implementation
//!
//! Both the tag detector and the quote ranker depend only on the [`Embedder`]
//! trait, so hosts and tests can supply their own provider.

use anyhow::{Context, Result};
use model2vec::Model2Vec;
use std::path::Path;
use tracing::{debug, info};

/// Embedding model abstraction
///
/// Implementations must be deterministic for a loaded model and return batch
/// output in input order.
pub trait Embedder: Send + Sync {
    /// Generate embedding for a single text
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Get embedding dimension
    fn dimension(&self) -> usize;

    /// Get model name/identifier
    fn name(&self) -> &str;
}

/// Cosine similarity between two embeddings.
///
/// Mismatched lengths, zero-norm vectors and non-finite results score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a > 0.0 && norm_b > 0.0 {
        let sim = dot / (norm_a * norm_b);
        // Canonical zero: -0.0 must tie with 0.0 under total ordering.
        if sim.is_finite() && sim != 0.0 {
            sim
        } else {
            0.0
        }
    } else {
        0.0
    }
}

// ============================================================================
// Model2Vec Embedder
// ============================================================================

/// Default Model2Vec model (HuggingFace ID)
pub const DEFAULT_MODEL_ID: &str = "minishlab/potion-base-8M";

/// Model2Vec based sentence embedder
pub struct Model2VecEmbedder {
    model: Model2Vec,
    model_name: String,
    dimension: usize,
}

impl Model2VecEmbedder {
    /// Load model from local path
    pub fn from_path(path: &Path) -> Result<Self> {
        let model = Model2Vec::from_pretrained(path.to_string_lossy().as_ref(), None, None)
            .with_context(|| format!("Failed to load Model2Vec from: {}", path.display()))?;

        Self::with_dimension(model, path.to_string_lossy().to_string())
    }

    /// Load model from HuggingFace Hub
    pub fn from_pretrained(model_id: &str) -> Result<Self> {
        let model = Model2Vec::from_pretrained(model_id, None, None)
            .with_context(|| format!("Failed to load Model2Vec: {}", model_id))?;

        Self::with_dimension(model, model_id.to_string())
    }

    // The dimension is model-defined, so read it off a throwaway encoding.
    fn with_dimension(model: Model2Vec, model_name: String) -> Result<Self> {
        let sample = model
            .encode(&["dimension"])
            .context("Failed to encode sample text")?;
        let dimension = sample.ncols();
        info!(model = %model_name, dimension, "Loaded embedding model");

        Ok(Self {
            model,
            model_name,
            dimension,
        })
    }
}

impl Embedder for Model2VecEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text];
        let embeddings = self.model.encode(&texts).context("Failed to encode text")?;
        Ok(embeddings.row(0).to_vec())
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let embeddings = self.model.encode(texts).context("Failed to encode texts")?;
        if embeddings.nrows() != texts.len() {
            anyhow::bail!(
                "Model returned {} embeddings for {} texts",
                embeddings.nrows(),
                texts.len()
            );
        }

        debug!(count = texts.len(), "Encoded batch");
        Ok(embeddings.rows().into_iter().map(|r| r.to_vec()).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

// ============================================================================
// Factory function
// ============================================================================

/// Embedder selection, resolved from the `model` section of the config
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub model_id: String,
    pub model_path: Option<String>,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_path: None,
        }
    }
}

/// Create embedder based on configuration.
/// A local model path wins over the hub id.
pub fn create_embedder(config: &EmbedderConfig) -> Result<Box<dyn Embedder>> {
    let embedder = match &config.model_path {
        Some(path) => Model2VecEmbedder::from_path(Path::new(path))?,
        None => Model2VecEmbedder::from_pretrained(&config.model_id)?,
    };
    Ok(Box::new(embedder))
}
