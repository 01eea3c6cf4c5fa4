//! Memory engine protocol definitions.
//!
//! Data contracts shared between the memory engine and its hosts
//! (agent runtimes and persistence layers).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::types::Metadata;

/// Provenance tag for a chunk. Used only for filtering, never ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSource {
    /// Session transcript text.
    Session,
    /// Workspace file content.
    Workspace,
    /// Long-term memory notes.
    Memory,
}

impl fmt::Display for ChunkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Session => "session",
            Self::Workspace => "workspace",
            Self::Memory => "memory",
        };
        f.write_str(s)
    }
}

impl FromStr for ChunkSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" => Ok(Self::Session),
            "workspace" => Ok(Self::Workspace),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown chunk source: {}", other)),
        }
    }
}

/// The atomic retrievable unit of stored text.
///
/// Chunks are immutable after creation; the only lifecycle transition
/// is deletion. There is no update operation anywhere in the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique id, assigned at creation, never reused.
    pub id: String,

    /// Non-empty text slice.
    pub content: String,

    /// Where the text originated.
    pub source: ChunkSource,

    /// Opaque origin locator (file path, conversation key); may be empty.
    #[serde(default)]
    pub source_path: String,

    /// Fixed-length vector, present only when an embedding provider was
    /// configured at ingestion time and the embed call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// Free-form key/value bag, opaque to the engine.
    #[serde(default)]
    pub metadata: Metadata,

    /// Creation timestamp.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, content: impl Into<String>, source: ChunkSource) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            source,
            source_path: String::new(),
            embedding: None,
            metadata: HashMap::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Options for search queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of results.
    pub limit: usize,

    /// Minimum fused score for a result to be returned.
    pub threshold: f32,

    /// Restrict results to these sources. Empty means all sources.
    #[serde(default)]
    pub sources: Vec<ChunkSource>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            threshold: 0.0,
            sources: Vec::new(),
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_sources(mut self, sources: Vec<ChunkSource>) -> Self {
        self.sources = sources;
        self
    }

    /// Whether a chunk with the given source passes the filter.
    pub fn matches_source(&self, source: ChunkSource) -> bool {
        self.sources.is_empty() || self.sources.contains(&source)
    }
}

/// Result from a memory search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub chunk: Chunk,
    /// Fused relevance score. Non-negative; bounded to [0, 1] only when a
    /// single ranking path contributed.
    pub score: f32,
    /// Display excerpt centered on the earliest matching query term.
    pub snippet: String,
}

/// Store-level counters.
///
/// `pending_sync` and `last_sync` are reserved for an external
/// persistence collaborator; the engine only initializes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStatus {
    pub total_chunks: usize,
    /// Chunks with a stored vector.
    pub indexed_chunks: usize,
    pub pending_sync: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
