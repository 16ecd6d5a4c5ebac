//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has working defaults.

mod classifier;
mod gateway;
mod logging;
mod server;

pub use classifier::FileClassifierConfig;
pub use gateway::{FileGatewayConfig, MAX_GATEWAY_RETRIES};
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("gateway.max_retries cannot exceed {max} (got {value})")]
    TooManyRetries { value: u32, max: u32 },

    #[error("gateway.url cannot be empty")]
    EmptyGatewayUrl,

    #[error("classifier.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Federated GraphQL endpoint
    pub gateway: FileGatewayConfig,
    /// Intent classifier (Anthropic Messages API)
    pub classifier: FileClassifierConfig,
    /// HTTP server for `nlq serve`
    pub server: FileServerConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gateway.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("gateway"));
        }
        if self.classifier.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("classifier"));
        }
        if self.gateway.max_retries > MAX_GATEWAY_RETRIES {
            return Err(ConfigValidationError::TooManyRetries {
                value: self.gateway.max_retries,
                max: MAX_GATEWAY_RETRIES,
            });
        }
        if self.gateway.url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyGatewayUrl);
        }
        if self.classifier.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let mut redacted = self.clone();
        if redacted.classifier.api_key.is_some() {
            redacted.classifier.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&redacted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gateway]
url = "http://gateway.internal:4000/graphql"
timeout_seconds = 5
max_retries = 2

[classifier]
enabled = false
model = "claude-3-5-haiku-latest"

[server]
port = 8080

[logging]
pipeline_log = "pipeline.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.url, "http://gateway.internal:4000/graphql");
        assert_eq!(config.gateway.max_retries, 2);
        assert!(!config.classifier.enabled);
        assert_eq!(config.classifier.model, "claude-3-5-haiku-latest");
        assert_eq!(config.classifier.max_tokens, 500);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.logging.pipeline_log.as_deref(),
            Some(std::path::Path::new("pipeline.jsonl"))
        );
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.gateway.url, "http://localhost:4000/graphql");
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.gateway.max_retries, 0);
        assert!(config.classifier.enabled);
        assert_eq!(config.classifier.model, "claude-sonnet-4-20250514");
        assert_eq!(config.server.port, 5001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.gateway.timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("gateway"))
        );
    }

    #[test]
    fn test_validate_caps_retries() {
        let mut config = FileConfig::default();
        config.gateway.max_retries = MAX_GATEWAY_RETRIES;
        assert!(config.validate().is_ok());

        config.gateway.max_retries = u32::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::TooManyRetries {
                value: u32::MAX,
                max: MAX_GATEWAY_RETRIES,
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let mut config = FileConfig::default();
        config.gateway.url = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyGatewayUrl));

        let mut config = FileConfig::default();
        config.classifier.model = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_to_toml_redacts_api_key() {
        let mut config = FileConfig::default();
        config.classifier.api_key = Some("sk-secret".to_string());
        let rendered = config.to_toml().unwrap();
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[gateway]"));

        let round_trip: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(round_trip.gateway, config.gateway);
    }
}
