//! Query domain value objects: the uniform execution outcome.
//!
//! Transport failures (connection refused, timeout, unreadable body) and
//! application failures (a GraphQL `errors` list) collapse into the same
//! [`ExecutionResult`] shape, so callers handle every failure mode alike.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error half of an [`ExecutionResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionError {
    /// Human-readable message (joined GraphQL error messages, or the transport error)
    pub message: String,
    /// Raw GraphQL error objects, when the failure was application-level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Value>>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<Value>) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of sending a document to the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ExecutionError>,
}

impl ExecutionResult {
    /// Create a successful result
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result without details (transport-level)
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failed(ExecutionError::new(message))
    }

    /// Create a failed result from a GraphQL `errors` list.
    ///
    /// The message is the `", "`-joined `message` of each entry.
    pub fn from_graphql_errors(errors: Vec<Value>) -> Self {
        let message = errors
            .iter()
            .map(|e| {
                e.get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown GraphQL error")
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", ");
        Self::failed(ExecutionError::new(message).with_details(errors))
    }

    pub fn failed(error: ExecutionError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ExecutionError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success() {
        let result = ExecutionResult::success(json!({"products": []}));
        assert!(result.is_success());
        assert!(result.error().is_none());
        assert_eq!(result.data().unwrap()["products"], json!([]));
    }

    #[test]
    fn test_transport_failure_has_no_details() {
        let result = ExecutionResult::failure("connection refused");
        assert!(!result.is_success());
        assert!(result.data().is_none());
        assert_eq!(result.error_message(), Some("connection refused"));
        assert!(result.error().unwrap().details.is_none());
    }

    #[test]
    fn test_graphql_errors_are_joined() {
        let errors = vec![
            json!({"message": "Cannot query field \"foo\"", "locations": []}),
            json!({"message": "Variable $id is required"}),
        ];
        let result = ExecutionResult::from_graphql_errors(errors);

        assert!(!result.is_success());
        assert_eq!(
            result.error_message(),
            Some("Cannot query field \"foo\", Variable $id is required")
        );
        assert_eq!(result.error().unwrap().details.as_ref().unwrap().len(), 2);
    }
}
