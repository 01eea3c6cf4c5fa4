use super::*;

fn emb(values: Vec<f32>) -> Embedding {
    Embedding::new(values)
}

#[test]
fn test_index_insert_and_get() {
    let index = VectorIndex::new();
    index.insert("test".to_string(), emb(vec![1.0, 0.0, 0.0]));

    let retrieved = index.get("test").unwrap();
    assert_eq!(retrieved.dimension, 3);
}

#[test]
fn test_index_remove() {
    let index = VectorIndex::new();
    index.insert("test".to_string(), emb(vec![1.0, 0.0, 0.0]));
    assert!(index.get("test").is_some());

    index.remove("test");
    assert!(index.get("test").is_none());
}

#[test]
fn test_remove_nonexistent() {
    let index = VectorIndex::new();
    assert!(index.remove("nonexistent").is_none());
}

#[test]
fn test_index_search_ranks_closest_first() {
    let index = VectorIndex::new();
    index.insert("a".to_string(), emb(vec![1.0, 0.0, 0.0]));
    index.insert("b".to_string(), emb(vec![0.9, 0.1, 0.0]));
    index.insert("c".to_string(), emb(vec![0.0, 1.0, 0.0]));

    let query = emb(vec![1.0, 0.0, 0.0]);
    let results = index.search(&query, 0.0, |_| true);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, "a");
    assert!((results[0].score - 1.0).abs() < 0.001);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_index_search_with_min_score() {
    let index = VectorIndex::new();
    index.insert("a".to_string(), emb(vec![1.0, 0.0, 0.0]));
    index.insert("b".to_string(), emb(vec![0.0, 1.0, 0.0]));

    let query = emb(vec![1.0, 0.0, 0.0]);
    let results = index.search(&query, 0.5, |_| true);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a");
}

#[test]
fn test_index_search_accept_predicate() {
    let index = VectorIndex::new();
    index.insert("keep".to_string(), emb(vec![1.0, 0.0]));
    index.insert("drop".to_string(), emb(vec![1.0, 0.0]));

    let query = emb(vec![1.0, 0.0]);
    let results = index.search(&query, 0.0, |id| id == "keep");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "keep");
}

#[test]
fn test_search_empty_index() {
    let index = VectorIndex::new();
    let query = emb(vec![1.0, 0.0, 0.0]);
    let results = index.search(&query, 0.0, |_| true);
    assert!(results.is_empty());
}

#[test]
fn test_index_len_and_clear() {
    let index = VectorIndex::new();
    assert!(index.is_empty());

    index.insert("a".to_string(), emb(vec![1.0]));
    index.insert("b".to_string(), emb(vec![1.0]));
    assert_eq!(index.len(), 2);

    index.clear();
    assert!(index.is_empty());
}

#[test]
fn test_insert_overwrite() {
    let index = VectorIndex::new();
    index.insert("same-id".to_string(), emb(vec![1.0, 0.0]));
    index.insert("same-id".to_string(), emb(vec![0.0, 1.0]));

    assert_eq!(index.len(), 1);
    let retrieved = index.get("same-id").unwrap();
    assert_eq!(retrieved.vector, vec![0.0, 1.0]);
}

#[test]
fn test_index_default() {
    let index = VectorIndex::default();
    assert!(index.is_empty());
}
