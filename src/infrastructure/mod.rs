//! Infrastructure layer - External service implementations

pub mod cache;
pub mod embedding;
pub mod llm;
pub mod logging;
pub mod services;
