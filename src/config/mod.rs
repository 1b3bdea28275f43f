mod app_config;

pub use app_config::{AppConfig, GatewaySettings, LogFormat, LoggingConfig, ServerConfig};
