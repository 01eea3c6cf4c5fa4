//! Score fusion for the two ranking paths.

use std::collections::HashMap;

/// Weights applied when merging the vector and keyword ranked lists.
#[derive(Debug, Clone)]
pub struct FusionConfig {
    /// Weight applied to cosine-similarity scores.
    pub vector_weight: f32,
    /// Weight applied to keyword match-ratio scores.
    pub keyword_weight: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            vector_weight: 0.7,
            keyword_weight: 0.3,
        }
    }
}

/// Merge two ranked `(id, score)` lists into one by chunk id.
///
/// A chunk present in both lists scores
/// `vector * vector_weight + keyword * keyword_weight`; a chunk present
/// in only one list keeps just that weighted term. The merged list is
/// sorted by descending fused score. Pure over its inputs, so it can be
/// exercised without a store or provider.
pub fn weighted_fusion(
    vector_results: &[(String, f32)],
    keyword_results: &[(String, f32)],
    config: &FusionConfig,
) -> Vec<(String, f32)> {
    let mut scores: HashMap<String, f32> = HashMap::new();

    for (id, score) in vector_results {
        *scores.entry(id.clone()).or_insert(0.0) += config.vector_weight * score;
    }

    for (id, score) in keyword_results {
        *scores.entry(id.clone()).or_insert(0.0) += config.keyword_weight * score;
    }

    let mut results: Vec<(String, f32)> = scores.into_iter().collect();
    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    results
}

#[cfg(test)]
#[path = "fusion_tests.rs"]
mod tests;
