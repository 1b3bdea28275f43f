//! In-memory similarity store using linear search

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::cache::{CacheEntry, SimilarityMatch, SimilarityStore};
use crate::domain::embedding::cosine_similarity;
use crate::domain::DomainError;

/// Append-only, linear-scan similarity store.
///
/// Entries are kept in insertion order and never removed. The scan replaces
/// its best candidate only on a strictly greater score, so when several
/// entries tie on similarity the earliest-inserted one wins. Suitable at
/// demo scale; larger deployments would swap in an ANN-backed store behind
/// the same trait.
#[derive(Debug, Default)]
pub struct InMemorySimilarityStore {
    entries: RwLock<Vec<CacheEntry>>,
}

impl InMemorySimilarityStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SimilarityStore for InMemorySimilarityStore {
    async fn nearest(&self, query: &[f32]) -> Result<Option<SimilarityMatch>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        let mut best: Option<SimilarityMatch> = None;

        for entry in entries.iter() {
            let score = cosine_similarity(query, entry.embedding());

            let is_better = match best {
                Some(ref current) => score > current.score,
                None => true,
            };

            if is_better {
                best = Some(SimilarityMatch::new(entry.value(), score));
            }
        }

        Ok(best)
    }

    async fn append(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(entry);

        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}
