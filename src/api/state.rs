//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{AnalysisService, GatewayServiceTrait, SemanticCacheService};

/// Application state containing shared services.
///
/// Built once at startup and cloned per request; the gateway and its cache
/// live for the process lifetime so cache hits accumulate across requests.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn GatewayServiceTrait>,
    pub cache: Arc<SemanticCacheService>,
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn GatewayServiceTrait>,
        cache: Arc<SemanticCacheService>,
        analysis: Arc<AnalysisService>,
    ) -> Self {
        Self {
            gateway,
            cache,
            analysis,
        }
    }
}
