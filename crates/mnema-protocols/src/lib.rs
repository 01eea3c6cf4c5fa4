//! # Mnema Protocols
//!
//! Shared type and error definitions for the Mnema hybrid memory engine.
//! Contains only data contracts - no implementations.
//!
//! ## Core Types
//!
//! - [`Chunk`] - The atomic retrievable unit of stored text
//! - [`ChunkSource`] - Provenance tag partitioning chunks by origin
//! - [`SearchResult`] - A ranked chunk with its score and display snippet
//! - [`SearchOptions`] - Limit, threshold, and source filters for queries
//! - [`MemoryStatus`] - Store-level counters for hosts and persistence layers

pub mod error;
pub mod memory;
pub mod types;

pub use error::MemoryError;
pub use memory::{Chunk, ChunkSource, MemoryStatus, SearchOptions, SearchResult};
pub use types::*;
