//! Semantic response caching service
//!
//! Pairs a similarity store with an embedding provider so that callers can
//! look up previously generated results for semantically similar keys.
//! Caching is a best-effort optimization: embedding failures degrade to
//! "no caching", they never fail the caller's request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::cache::{CacheEntry, SemanticCacheConfig, SimilarityStore};
use crate::domain::embedding::{EmbeddingProvider, EmbeddingRequest};

/// Statistics for the semantic cache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanticCacheStats {
    /// Total number of entries
    pub entries: usize,
    /// Total cache hits
    pub hits: u64,
    /// Total cache misses
    pub misses: u64,
}

impl SemanticCacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;

        if total == 0 {
            return 0.0;
        }

        self.hits as f32 / total as f32
    }
}

/// Semantic cache over an embedding provider and a similarity store
#[derive(Debug)]
pub struct SemanticCacheService {
    store: Arc<dyn SimilarityStore>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    config: SemanticCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SemanticCacheService {
    /// Create a new cache service with the default configuration. Passing
    /// `None` for the embedder disables caching entirely (every lookup
    /// misses, every store is a no-op).
    pub fn new(
        store: Arc<dyn SimilarityStore>,
        embedder: Option<Arc<dyn EmbeddingProvider>>,
    ) -> Self {
        Self::with_config(store, embedder, SemanticCacheConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn SimilarityStore>,
        embedder: Option<Arc<dyn EmbeddingProvider>>,
        config: SemanticCacheConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &SemanticCacheConfig {
        &self.config
    }

    /// Generate an embedding for the given text, degrading to `None` when no
    /// provider is configured or the provider fails.
    async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let embedder = match self.embedder {
            Some(ref embedder) => embedder,
            None => return None,
        };

        let request = EmbeddingRequest::new(&self.config.embedding_model, text);

        match embedder.embed(request).await {
            Ok(response) => match response.first() {
                Some(embedding) => Some(embedding.vector().to_vec()),
                None => {
                    warn!("Embedding provider returned no vectors, skipping semantic cache");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "Embedding request failed, skipping semantic cache");
                None
            }
        }
    }

    /// Look up a cached value for a semantically similar key.
    ///
    /// An empty store short-circuits before any embedding request is issued,
    /// so a cold cache costs nothing.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.is_empty().await {
            Ok(true) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "Cache lookup failed");
                return None;
            }
        }

        let query = match self.embed(key).await {
            Some(vector) => vector,
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        let best = match self.store.nearest(&query).await {
            Ok(best) => best,
            Err(e) => {
                warn!(error = %e, "Cache scan failed");
                return None;
            }
        };

        match best {
            Some(found) if found.score >= self.config.similarity_threshold => {
                debug!(similarity = found.score, "Semantic cache hit");
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(found.value)
            }
            Some(found) => {
                debug!(similarity = found.score, "Semantic cache miss");
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Cache a value under the given key. Best-effort: embedding failures
    /// make this a silent no-op, and store failures are logged and swallowed.
    pub async fn set(&self, key: &str, value: &str) {
        let vector = match self.embed(key).await {
            Some(vector) => vector,
            None => return,
        };

        if let Err(e) = self.store.append(CacheEntry::new(vector, value)).await {
            warn!(error = %e, "Failed to store semantic cache entry");
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> SemanticCacheStats {
        SemanticCacheStats {
            entries: self.store.len().await.unwrap_or(0),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::infrastructure::cache::InMemorySimilarityStore;

    fn create_service(embedder: MockEmbeddingProvider) -> (SemanticCacheService, Arc<MockEmbeddingProvider>) {
        let embedder = Arc::new(embedder);
        let service = SemanticCacheService::new(
            Arc::new(InMemorySimilarityStore::new()),
            Some(embedder.clone()),
        );
        (service, embedder)
    }

    #[tokio::test]
    async fn test_empty_cache_never_embeds() {
        let (service, embedder) = create_service(MockEmbeddingProvider::new("mock", 8));

        let cached = service.get("anything at all").await;

        assert!(cached.is_none());
        assert_eq!(embedder.call_count(), 0);

        let stats = service.stats().await;
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 0);
    }

    #[tokio::test]
    async fn test_exact_key_round_trip() {
        let (service, _) = create_service(MockEmbeddingProvider::new("mock", 64));

        service.set("gpt-4-turbo:create a table", "table config").await;
        let cached = service.get("gpt-4-turbo:create a table").await;

        // Deterministic embedder means identical keys score 1.0
        assert_eq!(cached.as_deref(), Some("table config"));

        let stats = service.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_score_equal_to_threshold_is_a_hit() {
        // cos([1,0],[3,4]) = 3/5 = 0.6 exactly, even in f32
        let embedder = MockEmbeddingProvider::new("mock", 2)
            .with_vector("stored key", vec![3.0, 4.0])
            .with_vector("query key", vec![1.0, 0.0]);
        let store = Arc::new(InMemorySimilarityStore::new());
        let config = SemanticCacheConfig::new().with_similarity_threshold(0.6);
        let service = SemanticCacheService::with_config(store, Some(Arc::new(embedder)), config);

        service.set("stored key", "boundary value").await;

        assert_eq!(service.get("query key").await.as_deref(), Some("boundary value"));
    }

    #[tokio::test]
    async fn test_score_below_threshold_is_a_miss() {
        // cos([1,0],[1,1]) ~= 0.707, below the 0.8 threshold
        let embedder = MockEmbeddingProvider::new("mock", 2)
            .with_vector("stored key", vec![1.0, 1.0])
            .with_vector("query key", vec![1.0, 0.0]);
        let store = Arc::new(InMemorySimilarityStore::new());
        let config = SemanticCacheConfig::new().with_similarity_threshold(0.8);
        let service = SemanticCacheService::with_config(store, Some(Arc::new(embedder)), config);

        service.set("stored key", "too far").await;

        assert!(service.get("query key").await.is_none());

        let stats = service.stats().await;
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_zero_vector_never_matches() {
        let embedder = MockEmbeddingProvider::new("mock", 2)
            .with_vector("stored key", vec![0.0, 0.0])
            .with_vector("query key", vec![1.0, 0.0]);
        let store = Arc::new(InMemorySimilarityStore::new());
        let service = SemanticCacheService::new(store.clone(), Some(Arc::new(embedder)));

        service.set("stored key", "zero entry").await;
        assert_eq!(store.len().await.unwrap(), 1);

        // Similarity against the zero-norm entry evaluates to 0, not an error
        assert!(service.get("query key").await.is_none());
    }

    #[tokio::test]
    async fn test_no_embedder_disables_caching() {
        let store = Arc::new(InMemorySimilarityStore::new());
        let service = SemanticCacheService::new(store.clone(), None);

        service.set("key", "value").await;

        assert_eq!(store.len().await.unwrap(), 0);
        assert!(service.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_embedding_failure_makes_set_a_no_op() {
        let embedder = Arc::new(MockEmbeddingProvider::new("mock", 8).with_error("API down"));
        let store = Arc::new(InMemorySimilarityStore::new());
        let service = SemanticCacheService::new(store.clone(), Some(embedder));

        service.set("key", "value").await;

        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_embedding_failure_on_get_is_a_miss() {
        let store = Arc::new(InMemorySimilarityStore::new());
        // Seed the store directly so it is non-empty
        store
            .append(CacheEntry::new(vec![1.0, 0.0], "seeded"))
            .await
            .unwrap();

        let embedder = Arc::new(MockEmbeddingProvider::new("mock", 2).with_error("API down"));
        let service = SemanticCacheService::new(store, Some(embedder));

        assert!(service.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_hit_rate() {
        let (service, _) = create_service(MockEmbeddingProvider::new("mock", 32));

        service.set("key", "value").await;
        let _ = service.get("key").await;
        let _ = service.get("a completely different key").await;

        let stats = service.stats().await;
        assert_eq!(stats.hits + stats.misses, 2);
        assert!(stats.hit_rate() > 0.0);
    }
}
