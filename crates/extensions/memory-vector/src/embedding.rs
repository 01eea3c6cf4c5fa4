//! Embedding capability contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for embedding operations.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("Embedding failed: {0}")]
    Failed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A fixed-length vector representing the semantic content of a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    /// Vector representation.
    pub vector: Vec<f32>,
    /// Dimension of the embedding.
    pub dimension: usize,
}

impl Embedding {
    pub fn new(vector: Vec<f32>) -> Self {
        let dimension = vector.len();
        Self { vector, dimension }
    }

    /// Compute cosine similarity with another embedding.
    ///
    /// Returns 0.0 when the dimensions differ or either vector has zero
    /// norm, so a zero vector never divides by zero.
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.dimension != other.dimension {
            return 0.0;
        }

        let dot: f32 = self
            .vector
            .iter()
            .zip(other.vector.iter())
            .map(|(a, b)| a * b)
            .sum();

        let norm_a: f32 = self.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = other.vector.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

/// Contract for embedding providers.
///
/// Implementations may be backed by a remote service; callers must
/// tolerate arbitrary latency. `embed` preserves input order and
/// returns exactly one vector of length [`dimensions`](Self::dimensions)
/// per input string.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Stable implementation name.
    fn name(&self) -> &str;

    /// Model identifier.
    fn model(&self) -> &str;

    /// Fixed output dimension.
    fn dimensions(&self) -> usize;

    /// Generate embeddings for a batch of texts.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError>;

    /// Generate an embedding for a single text.
    async fn embed_one(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let embeddings = self.embed(&[text]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::Failed("Empty response".to_string()))
    }
}

/// Simple hash-based embedding for testing (not semantic).
pub struct SimpleHashEmbedding {
    dimensions: usize,
}

impl SimpleHashEmbedding {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn hash_text(&self, text: &str) -> Embedding {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; self.dimensions];

        for (i, word) in text.split_whitespace().enumerate() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let hash = hasher.finish();

            // Distribute hash across vector dimensions
            for j in 0..self.dimensions {
                let idx = (i + j) % self.dimensions;
                let val = ((hash >> (j % 64)) & 0xFF) as f32 / 255.0 - 0.5;
                vector[idx] += val;
            }
        }

        // Normalize
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Embedding::new(vector)
    }
}

impl Default for SimpleHashEmbedding {
    fn default() -> Self {
        Self::new(128)
    }
}

#[async_trait]
impl EmbeddingProvider for SimpleHashEmbedding {
    fn name(&self) -> &str {
        "simple-hash"
    }

    fn model(&self) -> &str {
        "hash-v1"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.hash_text(t)).collect())
    }
}

#[cfg(test)]
#[path = "embedding_tests.rs"]
mod tests;
