//! Similarity store trait and types

use std::fmt::Debug;

use async_trait::async_trait;

use super::CacheEntry;
use crate::domain::DomainError;

/// The best-scoring entry found by a nearest-neighbor scan
#[derive(Debug, Clone)]
pub struct SimilarityMatch {
    /// The cached result text of the best entry
    pub value: String,
    /// Cosine similarity between the query and the best entry
    pub score: f32,
}

impl SimilarityMatch {
    pub fn new(value: impl Into<String>, score: f32) -> Self {
        Self {
            value: value.into(),
            score,
        }
    }
}

/// Trait for append-only vector similarity stores.
///
/// Thresholding is the caller's concern; `nearest` reports the best match
/// regardless of score. Implementations must preserve insertion order and
/// break score ties in favor of the earliest-inserted entry.
#[async_trait]
pub trait SimilarityStore: Send + Sync + Debug {
    /// Find the entry most similar to the query vector
    async fn nearest(&self, query: &[f32]) -> Result<Option<SimilarityMatch>, DomainError>;

    /// Append a new entry; entries are never removed
    async fn append(&self, entry: CacheEntry) -> Result<(), DomainError>;

    /// Get the number of entries
    async fn len(&self) -> Result<usize, DomainError>;

    /// Check whether the store has no entries
    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
