//! Instance analysis endpoint handlers

use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::analysis::{AgentInfo, AnalysisResults, AnalysisStatus};

/// Credentials for the instance to analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceNowCredentials {
    pub instance_url: String,
    pub username: String,
    pub password: String,
}

/// Request body for `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub credentials: ServiceNowCredentials,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

fn default_analysis_type() -> String {
    "full".to_string()
}

/// Response body for `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub workflow_id: String,
    pub status: String,
    pub estimated_completion: DateTime<Utc>,
}

/// Response body for `GET /api/agents`
#[derive(Debug, Clone, Serialize)]
pub struct AgentsResponse {
    pub agents: &'static [AgentInfo],
}

/// POST /api/analyze
pub async fn start_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    debug!(
        instance_url = %request.credentials.instance_url,
        analysis_type = %request.analysis_type,
        "Starting instance analysis"
    );

    let started = state
        .analysis
        .start(&request.credentials.instance_url)
        .map_err(ApiError::from)?;

    Ok(Json(AnalyzeResponse {
        workflow_id: started.workflow_id,
        status: "started".to_string(),
        estimated_completion: started.estimated_completion,
    }))
}

/// GET /api/status/{workflow_id}
pub async fn get_status(
    State(state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Result<Json<AnalysisStatus>, ApiError> {
    let status = state.analysis.status(&workflow_id).map_err(ApiError::from)?;

    Ok(Json(status))
}

/// GET /api/results/{workflow_id}
pub async fn get_results(
    State(state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Result<Json<AnalysisResults>, ApiError> {
    let results = state.analysis.results(&workflow_id).map_err(ApiError::from)?;

    Ok(Json(results))
}

/// GET /api/agents
pub async fn list_agents(State(state): State<AppState>) -> Json<AgentsResponse> {
    Json(AgentsResponse {
        agents: state.analysis.agents(),
    })
}
