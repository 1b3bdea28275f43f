//! Infrastructure services

mod analysis_service;
mod gateway_service;
mod semantic_cache_service;

pub use analysis_service::{AnalysisService, StartedAnalysis};
pub use gateway_service::{GatewayService, GatewayServiceTrait};
pub use semantic_cache_service::{SemanticCacheService, SemanticCacheStats};
