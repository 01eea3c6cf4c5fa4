//! Hybrid memory engine for Mnema.
//!
//! Turns arbitrary text into searchable chunks, optionally embeds them
//! through a pluggable provider, and answers relevance queries by
//! fusing vector similarity with keyword overlap.
//!
//! ## How It Works
//!
//! 1. `add` splits text into overlapping windows and stores each chunk
//! 2. When a provider is configured, chunk text is embedded (with a
//!    content-fingerprint cache to skip byte-identical re-embeds)
//! 3. `search` ranks chunks on both paths and merges them with a
//!    weighted score fusion; `search_fts` is the keyword-only
//!    degradation path used when no provider exists

mod chunker;
mod embedding;
mod fusion;
mod manager;

pub use chunker::{chunk_content, generate_snippet, hash_content};
pub use embedding::{EmbeddingCache, OpenAIEmbedding, OpenAIEmbeddingConfig};
pub use fusion::{weighted_fusion, FusionConfig};
pub use manager::{MemoryManager, MemoryManagerConfig};
