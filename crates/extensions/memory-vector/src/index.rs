//! Vector index for similarity search.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::embedding::Embedding;

/// A scored match from the index.
#[derive(Debug, Clone)]
pub struct IndexMatch {
    pub id: String,
    pub score: f32,
}

/// Simple in-memory vector index using brute-force search.
pub struct VectorIndex {
    vectors: RwLock<HashMap<String, Embedding>>,
}

impl VectorIndex {
    /// Create a new vector index.
    pub fn new() -> Self {
        Self {
            vectors: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a vector into the index.
    pub fn insert(&self, id: String, embedding: Embedding) {
        self.vectors.write().insert(id, embedding);
    }

    /// Remove a vector from the index.
    pub fn remove(&self, id: &str) -> Option<Embedding> {
        self.vectors.write().remove(id)
    }

    /// Get a vector by ID.
    pub fn get(&self, id: &str) -> Option<Embedding> {
        self.vectors.read().get(id).cloned()
    }

    /// Rank every indexed vector against the query by cosine similarity.
    ///
    /// Results are sorted by descending score; entries below `min_score`
    /// are dropped. The `accept` predicate lets callers exclude ids
    /// before scoring (e.g. source filtering).
    pub fn search<F>(&self, query: &Embedding, min_score: f32, accept: F) -> Vec<IndexMatch>
    where
        F: Fn(&str) -> bool,
    {
        let vectors = self.vectors.read();
        let mut results: Vec<IndexMatch> = vectors
            .iter()
            .filter(|(id, _)| accept(id))
            .map(|(id, emb)| IndexMatch {
                id: id.clone(),
                score: query.cosine_similarity(emb),
            })
            .filter(|r| r.score >= min_score)
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        results
    }

    /// Get the number of vectors in the index.
    pub fn len(&self) -> usize {
        self.vectors.read().len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.read().is_empty()
    }

    /// Clear all vectors from the index.
    pub fn clear(&self) {
        self.vectors.write().clear();
    }
}

impl Default for VectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
