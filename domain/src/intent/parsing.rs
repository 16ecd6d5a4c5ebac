//! Parsing of classifier replies into intents
//!
//! The classifier is asked for a bare JSON object `{tool, arguments, fields}`
//! but may wrap it in code fences. Anything that does not survive parsing and
//! schema validation is reported as
//! [`DomainError::InvalidClassifierOutput`] so the caller can fall back.

use super::entities::{Arguments, DetectedIntent};
use crate::core::error::DomainError;
use crate::tool::registry::ToolRegistry;
use crate::tool::validation::{ArgumentValidator, SchemaArgumentValidator};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ClassifierReply {
    tool: String,
    #[serde(default)]
    arguments: Option<Arguments>,
    #[serde(default)]
    fields: Option<Vec<String>>,
}

/// Remove markdown code-fence markers (```` ```json ```` and ```` ``` ````).
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```JSON"))
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .trim()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parse and validate raw classifier output against the registry.
pub fn parse_classifier_output(
    text: &str,
    registry: &ToolRegistry,
) -> Result<DetectedIntent, DomainError> {
    let cleaned = strip_code_fences(text);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| DomainError::InvalidClassifierOutput(format!("not valid JSON: {}", e)))?;
    let reply: ClassifierReply = serde_json::from_value(value).map_err(|e| {
        DomainError::InvalidClassifierOutput(format!("unexpected reply shape: {}", e))
    })?;

    let spec = registry
        .get_tool(&reply.tool)
        .map_err(|e| DomainError::InvalidClassifierOutput(e.to_string()))?;

    let arguments = SchemaArgumentValidator
        .validate(&reply.arguments.unwrap_or_default(), spec)
        .map_err(|e| DomainError::InvalidClassifierOutput(e.to_string()))?;

    let fields: Vec<String> = reply
        .fields
        .unwrap_or_default()
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();

    let mut intent = DetectedIntent::new(spec.name.clone()).with_fields(fields);
    intent.arguments = arguments;
    Ok(intent)
}
