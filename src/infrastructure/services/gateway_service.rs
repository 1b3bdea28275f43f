//! Complexity-routed configuration generation gateway
//!
//! Routes natural-language ServiceNow requirements to a completion model
//! selected by the caller's complexity hint, consulting the semantic cache
//! before every provider call and storing fresh results after.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::routing::{ModelTier, RoutingTable};
use crate::domain::DomainError;

use super::SemanticCacheService;

/// Fixed instruction preamble prepended to every requirements prompt
const PROMPT_PREAMBLE: &str = "Generate ServiceNow configuration code from these requirements:";

/// Fixed system persona for configuration generation
const SYSTEM_PROMPT: &str = "You are an expert ServiceNow developer.";

/// Trait for the gateway so HTTP handlers and tests can depend on a double
#[async_trait]
pub trait GatewayServiceTrait: Send + Sync + std::fmt::Debug {
    /// Generate configuration code from requirements, routed by complexity
    async fn generate_config(
        &self,
        requirements: &str,
        complexity: &str,
    ) -> Result<String, DomainError>;
}

/// Gateway routing generation requests to tiered completion models
#[derive(Debug)]
pub struct GatewayService {
    provider: Arc<dyn LlmProvider>,
    cache: Arc<SemanticCacheService>,
    routing: RoutingTable,
}

impl GatewayService {
    pub fn new(provider: Arc<dyn LlmProvider>, cache: Arc<SemanticCacheService>) -> Self {
        Self::with_routing(provider, cache, RoutingTable::default())
    }

    pub fn with_routing(
        provider: Arc<dyn LlmProvider>,
        cache: Arc<SemanticCacheService>,
        routing: RoutingTable,
    ) -> Self {
        Self {
            provider,
            cache,
            routing,
        }
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    fn render_prompt(requirements: &str) -> String {
        format!("{}\n{}", PROMPT_PREAMBLE, requirements)
    }

    /// Cache keys combine the model id and the rendered prompt so identical
    /// requirements routed to different tiers never collide. The key is a raw
    /// concatenation; no case or whitespace normalization is applied.
    fn cache_key(model: &str, prompt: &str) -> String {
        format!("{}:{}", model, prompt)
    }
}

#[async_trait]
impl GatewayServiceTrait for GatewayService {
    async fn generate_config(
        &self,
        requirements: &str,
        complexity: &str,
    ) -> Result<String, DomainError> {
        let tier = ModelTier::from_complexity(complexity);
        let model = self.routing.model_for(tier);

        debug!(tier = tier.as_str(), model, "Routing generation request");

        let prompt = Self::render_prompt(requirements);
        let key = Self::cache_key(model, &prompt);

        if let Some(cached) = self.cache.get(&key).await {
            info!(model, "Serving generation request from semantic cache");
            return Ok(cached);
        }

        let request = LlmRequest::builder()
            .system(SYSTEM_PROMPT)
            .user(&prompt)
            .build();

        let response = self.provider.chat(model, request).await?;
        let content = response.content();

        if content.is_empty() {
            return Err(DomainError::provider(
                self.provider.provider_name(),
                "Completion contained no content",
            ));
        }

        let content = content.to_string();
        self.cache.set(&key, &content).await;

        Ok(content)
    }
}
