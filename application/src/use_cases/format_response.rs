//! Response formatting
//!
//! Every request, successful or not, ends in one [`TranslationResponse`].
//! `arguments` always carries what the message implied, captured before any
//! symbolic lookup rewrote it.

use super::build_query::TranslateError;
use chrono::{SecondsFormat, Utc};
use nlq_domain::{Arguments, DetectedIntent, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for `query` when no document was rendered
pub const NO_QUERY: &str = "N/A";

/// Uniform payload returned for a translated message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// The original user message
    pub message: String,
    /// Resolved tool name
    pub intent: String,
    /// Arguments implied by the message
    pub arguments: Arguments,
    /// Text of the executed document, or `"N/A"`
    pub query: String,
    /// Response data on success
    pub result: Option<Value>,
    /// Failure message, if any
    pub error: Option<String>,
    /// RFC 3339 UTC, millisecond precision
    pub timestamp: String,
}

impl TranslationResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Assembles [`TranslationResponse`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Response for an executed document
    pub fn executed(
        &self,
        message: &str,
        intent: &DetectedIntent,
        document: &str,
        result: &ExecutionResult,
    ) -> TranslationResponse {
        let (data, error) = if result.is_success() {
            (result.data.clone(), None)
        } else {
            (
                None,
                Some(
                    result
                        .error_message()
                        .unwrap_or("Query execution failed")
                        .to_string(),
                ),
            )
        };

        TranslationResponse {
            message: message.to_string(),
            intent: intent.tool_name.clone(),
            arguments: intent.arguments.clone(),
            query: document.to_string(),
            result: data,
            error,
            timestamp: now(),
        }
    }

    /// Response for a request that failed before its main document ran
    pub fn failed(
        &self,
        message: &str,
        intent: &DetectedIntent,
        error: &TranslateError,
    ) -> TranslationResponse {
        TranslationResponse {
            message: message.to_string(),
            intent: intent.tool_name.clone(),
            arguments: intent.arguments.clone(),
            query: NO_QUERY.to_string(),
            result: None,
            error: Some(error.to_string()),
            timestamp: now(),
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
