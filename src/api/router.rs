use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::ai;
use super::analysis;
use super::health;
use super::state::AppState;

/// Create the application router
pub fn create_router(state: AppState, frontend_origin: &str) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/api", create_api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origin))
}

/// API routes consumed by the frontend
fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/generate_config", post(ai::generate_config))
        .route("/analyze", post(analysis::start_analysis))
        .route("/status/{workflow_id}", get(analysis::get_status))
        .route("/results/{workflow_id}", get(analysis::get_results))
        .route("/agents", get(analysis::list_agents))
}

fn cors_layer(frontend_origin: &str) -> CorsLayer {
    match frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!(
                origin = frontend_origin,
                "Invalid CORS origin, cross-origin requests will be rejected"
            );
            CorsLayer::new()
        }
    }
}
