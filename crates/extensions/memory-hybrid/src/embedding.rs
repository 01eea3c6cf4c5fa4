//! OpenAI-compatible embedding provider and the content-keyed cache.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use mnema_memory_vector::{Embedding, EmbeddingError, EmbeddingProvider};

/// Configuration for OpenAI embeddings.
#[derive(Debug, Clone)]
pub struct OpenAIEmbeddingConfig {
    /// API key for OpenAI.
    pub api_key: String,
    /// Model to use (default: text-embedding-3-small).
    pub model: String,
    /// Base URL for API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Embedding dimension (default: 1536 for text-embedding-3-small).
    pub dimensions: usize,
}

impl OpenAIEmbeddingConfig {
    /// Create config with API key using defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "text-embedding-3-small".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            dimensions: 1536,
        }
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set custom base URL (for Azure OpenAI or compatible APIs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set embedding dimension.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// OpenAI embedding provider.
pub struct OpenAIEmbedding {
    client: reqwest::Client,
    config: OpenAIEmbeddingConfig,
}

impl OpenAIEmbedding {
    /// Create a new OpenAI embedding provider.
    pub fn new(config: OpenAIEmbeddingConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from API key with defaults.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(OpenAIEmbeddingConfig::new(api_key))
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbedding {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    async fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let request = EmbeddingRequest {
            input: texts.iter().map(|t| t.to_string()).collect(),
            model: self.config.model.clone(),
        };

        let url = format!("{}/embeddings", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingError::Failed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmbeddingError::Failed(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Failed(format!("Parse error: {}", e)))?;

        debug!("Generated {} embeddings", embedding_response.data.len());

        Ok(embedding_response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.embedding))
            .collect())
    }
}

/// Process-lifetime cache of embeddings keyed by content fingerprint.
///
/// Never evicted: keys are derived from content, so growth is bounded
/// by distinct content rather than ingestion count. A collision only
/// costs a redundant re-embed.
#[derive(Default)]
pub struct EmbeddingCache {
    entries: RwLock<HashMap<String, Embedding>>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed embedding.
    pub fn get(&self, fingerprint: &str) -> Option<Embedding> {
        self.entries.read().get(fingerprint).cloned()
    }

    /// Store an embedding under its content fingerprint.
    pub fn insert(&self, fingerprint: String, embedding: Embedding) {
        self.entries.write().insert(fingerprint, embedding);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
#[path = "embedding_tests.rs"]
mod tests;
