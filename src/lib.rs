//! AI ServiceNow Consultancy API
//!
//! A complexity-routed LLM gateway that turns natural-language ServiceNow
//! requirements into configuration code, with a semantic cache that serves
//! repeated requests without touching the model backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use domain::cache::SemanticCacheConfig;
use domain::embedding::EmbeddingProvider;
use domain::llm::LlmProvider;
use domain::DomainError;
use infrastructure::cache::InMemorySimilarityStore;
use infrastructure::embedding::OpenAiEmbeddingProvider;
use infrastructure::llm::{HttpClient, OpenAiProvider};
use infrastructure::services::{AnalysisService, GatewayService, SemanticCacheService};

/// Create the application state with all services initialized.
///
/// The gateway, its cache, and the similarity store are constructed exactly
/// once here and shared for the process lifetime; requests only ever see
/// `Arc` clones, so cache hits accumulate across requests. A missing
/// completion credential fails construction immediately rather than failing
/// the first request.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| DomainError::configuration("OPENAI_API_KEY is not set"))?;

    let provider: Arc<dyn LlmProvider> =
        Arc::new(OpenAiProvider::new(HttpClient::new(), api_key.clone()));
    info!("Using OpenAI completion provider");

    // The same credential serves the embedder; the cache still tolerates an
    // absent embedder so caching degrades instead of failing requests
    let embedder: Option<Arc<dyn EmbeddingProvider>> = Some(Arc::new(
        OpenAiEmbeddingProvider::new(HttpClient::new(), api_key),
    ));

    let cache_config = SemanticCacheConfig::new()
        .with_similarity_threshold(config.gateway.similarity_threshold)
        .with_embedding_model(&config.gateway.embedding_model);

    let cache = Arc::new(SemanticCacheService::with_config(
        Arc::new(InMemorySimilarityStore::new()),
        embedder,
        cache_config,
    ));

    if config.gateway.similarity_threshold < 0.5 {
        warn!(
            threshold = config.gateway.similarity_threshold,
            "Low similarity threshold, unrelated requests may share cached results"
        );
    }

    let gateway = Arc::new(GatewayService::with_routing(
        provider,
        cache.clone(),
        config.gateway.routing.clone(),
    ));

    let analysis = Arc::new(AnalysisService::new());

    Ok(AppState::new(gateway, cache, analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var manipulation is process-wide, so both paths live in one test
    #[test]
    fn test_create_app_state_requires_credential() {
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
        let result = create_app_state(&AppConfig::default());
        assert!(result.is_err());

        unsafe {
            std::env::set_var("OPENAI_API_KEY", "sk-test");
        }
        let result = create_app_state(&AppConfig::default());
        assert!(result.is_ok());

        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
    }
}
