//! Semantic cache entry

use serde::{Deserialize, Serialize};

/// A cached pairing of an embedding vector and a previously generated result.
///
/// Entries are immutable once created and live for the process lifetime; the
/// store never deletes or reorders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The embedding vector for similarity search
    embedding: Vec<f32>,
    /// The cached result text
    value: String,
}

impl CacheEntry {
    pub fn new(embedding: Vec<f32>, value: impl Into<String>) -> Self {
        Self {
            embedding,
            value: value.into(),
        }
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
