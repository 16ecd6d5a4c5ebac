//! Anthropic Messages API classifier
//!
//! Sends one system instruction plus one user turn and returns the text of
//! the first content block.

use crate::config::FileClassifierConfig;
use async_trait::async_trait;
use nlq_application::ports::classifier::{ClassifierError, IntentClassifier};
use nlq_domain::util::preview;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

/// Classifier backed by the Anthropic Messages API
pub struct AnthropicClassifier {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    api_version: String,
}

impl AnthropicClassifier {
    /// Build a classifier from the `[classifier]` section.
    ///
    /// Fails with [`ClassifierError::Unavailable`] when the classifier is
    /// disabled or no API key resolves.
    pub fn from_config(config: &FileClassifierConfig) -> Result<Self, ClassifierError> {
        if !config.enabled {
            return Err(ClassifierError::Unavailable(
                "disabled in configuration".to_string(),
            ));
        }
        let api_key = config.resolve_api_key().ok_or_else(|| {
            ClassifierError::Unavailable(format!("{} is not set", config.api_key_env))
        })?;

        Ok(Self::new(api_key, &config.model, config.timeout())?
            .with_base_url(&config.base_url)
            .with_max_tokens(config.max_tokens)
            .with_api_version(&config.api_version))
    }

    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifierError> {
        let defaults = FileClassifierConfig::default();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: defaults.base_url,
            model: model.into(),
            max_tokens: defaults.max_tokens,
            api_version: defaults.api_version,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl IntentClassifier for AnthropicClassifier {
    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn classify(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ClassifierError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: system_prompt,
            messages: [Message {
                role: "user",
                content: user_message,
            }],
        };

        debug!("Calling classifier {} at {}", self.model, self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout
                } else {
                    ClassifierError::CallFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::CallFailed(format!(
                "Anthropic API error {}: {}",
                status,
                preview(&body, 200)
            )));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ClassifierError::Timeout
            } else {
                ClassifierError::CallFailed(format!("Invalid response body: {}", e))
            }
        })?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ClassifierError::CallFailed("Empty response from classifier".to_string()))
    }
}
