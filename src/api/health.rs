//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

/// Service banner returned at the root path
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET / - service banner
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "AI ServiceNow Consultancy API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health - liveness probe
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready - readiness probe with component checks
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.cache.stats().await;

    let checks = vec![HealthCheck {
        name: "semantic_cache".to_string(),
        status: HealthStatus::Healthy,
        message: Some(format!(
            "{} entries, {} hits, {} misses",
            stats.entries, stats.hits, stats.misses
        )),
    }];

    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        checks: Some(checks),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            timestamp: Utc::now(),
            checks: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("checks"));
    }

    #[test]
    fn test_root_banner() {
        let banner = RootResponse {
            message: "AI ServiceNow Consultancy API",
            version: "0.1.0",
        };

        let json = serde_json::to_string(&banner).unwrap();
        assert!(json.contains("AI ServiceNow Consultancy API"));
    }
}
