//! Memory engine errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_error() {
        let err = MemoryError::Embedding("provider unavailable".to_string());
        let display = err.to_string();
        assert!(display.contains("Embedding error"));
        assert!(display.contains("provider unavailable"));
    }

    #[test]
    fn test_storage_error() {
        let err = MemoryError::Storage("map poisoned".to_string());
        let display = err.to_string();
        assert!(display.contains("Storage error"));
        assert!(display.contains("map poisoned"));
    }

    #[test]
    fn test_error_debug() {
        let err = MemoryError::Embedding("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Embedding"));
    }
}
