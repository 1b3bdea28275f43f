//! Domain layer - Core business logic and entities

pub mod analysis;
pub mod cache;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod routing;

pub use cache::{CacheEntry, SemanticCacheConfig, SimilarityMatch, SimilarityStore};
pub use embedding::{cosine_similarity, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
pub use error::DomainError;
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
pub use routing::{ModelTier, RoutingTable};
