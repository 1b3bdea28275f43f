//! API types - request/response bodies and the error envelope

pub mod error;
pub mod generate;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use generate::{GenerateConfigRequest, GenerateConfigResponse};
pub use json::Json;
