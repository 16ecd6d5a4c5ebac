//! Intent classifier port
//!
//! Defines the interface for the external language-model call used by the
//! classifier strategy.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while calling the classifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Classifier call failed: {0}")]
    CallFailed(String),

    #[error("Classifier timed out")]
    Timeout,
}

/// Single-turn text completion used to classify a message
///
/// Implementations (adapters) live in the infrastructure layer. The returned
/// text is the raw completion; interpreting it is the caller's job.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Identifier used in logs (e.g. the model name)
    fn name(&self) -> &str;

    /// Whether a credential is configured for this classifier
    fn is_available(&self) -> bool {
        true
    }

    /// Send the system instruction and a user turn, returning the completion text
    async fn classify(&self, system_prompt: &str, user_message: &str)
    -> Result<String, ClassifierError>;
}
