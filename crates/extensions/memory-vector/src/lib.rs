//! Vector search primitives for Mnema.
//!
//! Defines the embedding capability contract that concrete providers
//! implement, and a brute-force in-memory index ranked by cosine
//! similarity.

mod embedding;
mod index;

pub use embedding::{Embedding, EmbeddingError, EmbeddingProvider, SimpleHashEmbedding};
pub use index::{IndexMatch, VectorIndex};
