//! Port for structured pipeline logging.
//!
//! Defines the [`PipelineLogger`] trait for recording the lifecycle of a
//! translation (request received, strategy selected, document built, ...) to
//! a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per lifecycle point (JSONL).

use serde_json::{Value, json};

/// A structured pipeline event for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineEvent {
    /// Event type identifier (e.g., "request_received", "document_built").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PipelineEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn request_received(message: &str) -> Self {
        Self::new("request_received", json!({ "message": message }))
    }

    pub fn strategy_selected(strategy: &str, tool: &str) -> Self {
        Self::new(
            "strategy_selected",
            json!({ "strategy": strategy, "tool": tool }),
        )
    }

    pub fn strategy_failed(strategy: &str, reason: &str) -> Self {
        Self::new(
            "strategy_failed",
            json!({ "strategy": strategy, "reason": reason }),
        )
    }

    pub fn document_built(operation_name: &str, kind: &str, secondary_lookup: bool) -> Self {
        Self::new(
            "document_built",
            json!({
                "operation": operation_name,
                "kind": kind,
                "secondaryLookup": secondary_lookup,
            }),
        )
    }

    pub fn execution_completed(operation_name: &str, success: bool) -> Self {
        Self::new(
            "execution_completed",
            json!({ "operation": operation_name, "success": success }),
        )
    }

    pub fn response_ready(tool: &str, error: Option<&str>) -> Self {
        Self::new("response_ready", json!({ "tool": tool, "error": error }))
    }
}

/// Port for logging pipeline events to a structured log.
///
/// `log` is synchronous and infallible; adapters swallow their own I/O errors.
pub trait PipelineLogger: Send + Sync {
    fn log(&self, event: PipelineEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoPipelineLogger;

impl PipelineLogger for NoPipelineLogger {
    fn log(&self, _event: PipelineEvent) {}
}
