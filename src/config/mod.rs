//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, ClientConfig, GatewayConfig, LogFormat, LoggingConfig, MetricsConfig,
    ProviderEndpoint, ServerConfig,
};
