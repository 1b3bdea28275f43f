//! Configuration generation endpoint handler

use axum::extract::State;
use tracing::info;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, GenerateConfigRequest, GenerateConfigResponse, Json};

/// POST /api/generate_config
///
/// Generate ServiceNow configuration code from natural-language requirements.
pub async fn generate_config(
    State(state): State<AppState>,
    Json(request): Json<GenerateConfigRequest>,
) -> Result<Json<GenerateConfigResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    info!(
        complexity = %request.complexity,
        "Processing configuration generation request"
    );

    let config = state
        .gateway
        .generate_config(&request.requirements, &request.complexity)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GenerateConfigResponse { config }))
}
