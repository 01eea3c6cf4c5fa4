//! Hybrid memory manager.
//!
//! The only component with external API surface: orchestrates
//! ingestion (chunk, cache-check, embed, store) and retrieval (vector
//! search, keyword search, weighted fusion, filtering, pagination).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use mnema_memory_vector::{EmbeddingProvider, VectorIndex};
use mnema_protocols::error::MemoryError;
use mnema_protocols::memory::{Chunk, ChunkSource, MemoryStatus, SearchOptions, SearchResult};
use mnema_protocols::types::Metadata;

use crate::chunker::{chunk_content, generate_snippet, hash_content};
use crate::embedding::EmbeddingCache;
use crate::fusion::{weighted_fusion, FusionConfig};

/// Configuration for the memory manager.
#[derive(Debug, Clone)]
pub struct MemoryManagerConfig {
    /// Window width for content chunking, in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive windows, in characters.
    pub chunk_overlap: usize,
    /// Maximum snippet length for search results.
    pub snippet_length: usize,
    /// Weights for merging the vector and keyword ranked lists.
    pub fusion: FusionConfig,
}

impl Default for MemoryManagerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 512,
            chunk_overlap: 50,
            snippet_length: 200,
            fusion: FusionConfig::default(),
        }
    }
}

impl MemoryManagerConfig {
    pub fn with_chunking(mut self, chunk_size: usize, chunk_overlap: usize) -> Self {
        self.chunk_size = chunk_size;
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn with_fusion(mut self, fusion: FusionConfig) -> Self {
        self.fusion = fusion;
        self
    }
}

/// In-process hybrid memory engine.
///
/// Owns the chunk store, the vector index, and the embedding cache;
/// no two managers share these structures. Ids are random per chunk,
/// so coexisting managers can never collide.
pub struct MemoryManager {
    config: MemoryManagerConfig,
    chunks: RwLock<HashMap<String, Chunk>>,
    index: VectorIndex,
    cache: EmbeddingCache,
    provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl MemoryManager {
    /// Create a keyword-only manager (no embedding provider).
    pub fn new(config: MemoryManagerConfig) -> Self {
        Self {
            config,
            chunks: RwLock::new(HashMap::new()),
            index: VectorIndex::new(),
            cache: EmbeddingCache::new(),
            provider: None,
        }
    }

    /// Create a manager backed by an embedding provider.
    pub fn with_provider(config: MemoryManagerConfig, provider: Arc<dyn EmbeddingProvider>) -> Self {
        info!(
            "Memory manager using embedding provider {} ({})",
            provider.name(),
            provider.model()
        );
        Self {
            provider: Some(provider),
            ..Self::new(config)
        }
    }

    /// Ingest content: chunk it, store every chunk, and embed each one
    /// when a provider is configured.
    ///
    /// Returns the id of the first produced chunk, or `None` when the
    /// chunker yielded nothing. A failed embed call fails the whole
    /// call; chunks stored before the failure remain stored without a
    /// vector (best-effort, non-atomic).
    pub async fn add(
        &self,
        content: &str,
        source: ChunkSource,
        source_path: &str,
        metadata: Metadata,
    ) -> Result<Option<String>, MemoryError> {
        let pieces = chunk_content(content, self.config.chunk_size, self.config.chunk_overlap);
        if pieces.is_empty() {
            return Ok(None);
        }

        let mut first_id = None;
        for text in pieces {
            let id = format!("mem_{}", uuid::Uuid::new_v4());

            let chunk = Chunk::new(id.clone(), text.clone(), source)
                .with_source_path(source_path)
                .with_metadata(metadata.clone());
            self.chunks.write().insert(id.clone(), chunk);

            if let Some(provider) = &self.provider {
                let embedding = self.embed_cached(provider, &text).await?;
                if let Some(stored) = self.chunks.write().get_mut(&id) {
                    stored.embedding = Some(embedding.vector.clone());
                }
                self.index.insert(id.clone(), embedding);
            }

            first_id.get_or_insert(id);
        }

        debug!(source = %source, source_path, "Added content to memory");
        Ok(first_id)
    }

    /// Hybrid search: vector similarity fused with keyword overlap.
    ///
    /// The vector path runs only when a provider is configured and at
    /// least one chunk carries a vector; the keyword path always runs.
    /// Without a provider this returns exactly what [`search_fts`]
    /// returns for the same inputs.
    ///
    /// [`search_fts`]: Self::search_fts
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, MemoryError> {
        let vector_pairs = match &self.provider {
            Some(provider) if !self.index.is_empty() => {
                let query_embedding = provider
                    .embed_one(query)
                    .await
                    .map_err(|e| MemoryError::Embedding(e.to_string()))?;

                let chunks = self.chunks.read();
                self.index
                    .search(&query_embedding, f32::NEG_INFINITY, |id| {
                        chunks
                            .get(id)
                            .is_some_and(|c| options.matches_source(c.source))
                    })
                    .into_iter()
                    .map(|m| (m.id, m.score))
                    .collect()
            }
            _ => Vec::new(),
        };

        let keyword_pairs = self.keyword_scores(query, options);
        let fused = weighted_fusion(&vector_pairs, &keyword_pairs, &self.config.fusion);

        Ok(self.collect_results(query, fused, options))
    }

    /// Keyword-only search. Never consults the embedding provider; the
    /// designed degradation path when no provider is configured.
    pub fn search_fts(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let keyword_pairs = self.keyword_scores(query, options);
        let fused = weighted_fusion(&[], &keyword_pairs, &self.config.fusion);
        self.collect_results(query, fused, options)
    }

    /// Delete a chunk. Returns false when no chunk had that id.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.chunks.write().remove(id).is_some();
        if removed {
            self.index.remove(id);
            debug!(id, "Removed chunk");
        }
        removed
    }

    /// Delete every chunk whose source path exactly equals `path`.
    /// Returns the number of chunks deleted.
    pub fn remove_by_source_path(&self, path: &str) -> usize {
        let ids: Vec<String> = {
            let chunks = self.chunks.read();
            chunks
                .values()
                .filter(|c| c.source_path == path)
                .map(|c| c.id.clone())
                .collect()
        };

        let mut chunks = self.chunks.write();
        for id in &ids {
            chunks.remove(id);
            self.index.remove(id);
        }

        if !ids.is_empty() {
            debug!(path, count = ids.len(), "Removed chunks by source path");
        }
        ids.len()
    }

    /// Store-level counters. The sync fields are reserved for an
    /// external persistence collaborator.
    pub fn get_status(&self) -> MemoryStatus {
        MemoryStatus {
            total_chunks: self.chunks.read().len(),
            indexed_chunks: self.index.len(),
            pending_sync: 0,
            last_sync: None,
        }
    }

    /// Look up a chunk by id.
    pub fn get_chunk(&self, id: &str) -> Option<Chunk> {
        self.chunks.read().get(id).cloned()
    }

    /// List chunks, optionally restricted to one source.
    pub fn list_chunks(&self, source: Option<ChunkSource>) -> Vec<Chunk> {
        self.chunks
            .read()
            .values()
            .filter(|c| source.is_none_or(|s| c.source == s))
            .cloned()
            .collect()
    }

    /// Empty the chunk store and the vector index. The embedding cache
    /// survives: its entries are keyed by content, not by chunk.
    pub fn clear(&self) {
        self.chunks.write().clear();
        self.index.clear();
        debug!("Cleared memory store");
    }

    /// Embed one text, going through the content-fingerprint cache.
    async fn embed_cached(
        &self,
        provider: &Arc<dyn EmbeddingProvider>,
        text: &str,
    ) -> Result<mnema_memory_vector::Embedding, MemoryError> {
        let fingerprint = hash_content(text);

        if let Some(hit) = self.cache.get(&fingerprint) {
            debug!(%fingerprint, "Embedding cache hit");
            return Ok(hit);
        }

        let embedding = provider
            .embed_one(text)
            .await
            .map_err(|e| MemoryError::Embedding(e.to_string()))?;
        self.cache.insert(fingerprint, embedding.clone());
        Ok(embedding)
    }

    /// Keyword path: fraction of query terms (length > 2) found as
    /// case-insensitive substrings of the chunk content. Chunks with no
    /// matches are excluded; an all-short query yields nothing.
    fn keyword_scores(&self, query: &str, options: &SearchOptions) -> Vec<(String, f32)> {
        let terms: Vec<String> = query
            .split_whitespace()
            .filter(|t| t.chars().count() > 2)
            .map(|t| t.to_lowercase())
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let chunks = self.chunks.read();
        let mut results: Vec<(String, f32)> = chunks
            .values()
            .filter(|c| options.matches_source(c.source))
            .filter_map(|c| {
                let lower = c.content.to_lowercase();
                let matches = terms.iter().filter(|t| lower.contains(t.as_str())).count();
                (matches > 0).then(|| (c.id.clone(), matches as f32 / terms.len() as f32))
            })
            .collect();

        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        results
    }

    /// Threshold-filter, paginate, and attach snippets to a fused list.
    fn collect_results(
        &self,
        query: &str,
        fused: Vec<(String, f32)>,
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        let chunks = self.chunks.read();
        fused
            .into_iter()
            .filter(|(_, score)| *score >= options.threshold)
            .filter_map(|(id, score)| {
                chunks.get(&id).map(|chunk| SearchResult {
                    snippet: generate_snippet(&chunk.content, query, self.config.snippet_length),
                    chunk: chunk.clone(),
                    score,
                })
            })
            .take(options.limit)
            .collect()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
