//! Configuration generation request/response types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/generate_config`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateConfigRequest {
    /// Natural-language requirements to generate configuration from
    #[validate(length(min = 1, message = "requirements must not be empty"))]
    pub requirements: String,

    /// Requested complexity; unrecognized values route to the medium tier
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

fn default_complexity() -> String {
    "medium".to_string()
}

/// Response body for `POST /api/generate_config`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfigResponse {
    pub config: String,
}
