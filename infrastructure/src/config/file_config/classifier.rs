//! Classifier configuration from TOML (`[classifier]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic Messages API settings for the intent classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Set to false to always use keyword rules
    pub enabled: bool,
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
    pub timeout_seconds: u64,
}

impl FileClassifierConfig {
    /// Resolve the API key: direct key first, then the named environment variable.
    ///
    /// Returns `None` when disabled or when no non-empty key is found.
    pub fn resolve_api_key(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    pub fn is_available(&self) -> bool {
        self.resolve_api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 500,
            api_version: "2023-06-01".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        let config = FileClassifierConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "NLQ_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
        assert!(config.is_available());
    }

    #[test]
    fn test_disabled_is_unavailable() {
        let config = FileClassifierConfig {
            enabled: false,
            api_key: Some("sk-direct".to_string()),
            ..Default::default()
        };
        assert!(!config.is_available());
    }

    #[test]
    fn test_blank_key_is_unavailable() {
        let config = FileClassifierConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "NLQ_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
