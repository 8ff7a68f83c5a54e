use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::ProviderId;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub gateway: GatewayConfig,
    pub client: ClientConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Server-side gateway settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Outbound HTTP timeout per provider call
    pub timeout_secs: u64,
    /// Per-provider overrides keyed by provider id
    pub providers: HashMap<ProviderId, ProviderEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderEndpoint {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Settings for the `ask` command's fallback client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub gateway_url: String,
    pub start_provider: ProviderId,
    pub max_retries: u32,
    pub attempt_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            providers: HashMap::new(),
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn endpoint(&self, provider: ProviderId) -> ProviderEndpoint {
        self.providers.get(&provider).cloned().unwrap_or_default()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8080/api/chat".to_string(),
            start_provider: ProviderId::Groq,
            max_retries: 2,
            attempt_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gateway.timeout(), Duration::from_secs(20));
        assert_eq!(config.client.max_retries, 2);
        assert_eq!(config.client.attempt_timeout(), Duration::from_secs(30));
        assert_eq!(config.client.start_provider, ProviderId::Groq);
        assert!(config.gateway.endpoint(ProviderId::Gemini).base_url.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [logging]
                format = "json"

                [gateway.providers.gemini]
                base_url = "http://localhost:9999"

                [client]
                start_provider = "openai"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.gateway.endpoint(ProviderId::Gemini).base_url.as_deref(),
            Some("http://localhost:9999")
        );
        assert_eq!(config.client.start_provider, ProviderId::OpenAi);
        assert_eq!(config.server.port, 8080);
    }
}
