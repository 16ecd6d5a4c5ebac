//! Intent entities

use crate::query::selection::ALL_FIELDS;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool arguments (argument name → JSON value)
pub type Arguments = serde_json::Map<String, Value>;

/// Read a JSON value as a string argument.
///
/// Strings are returned as-is (empty strings count as absent) and numbers are
/// stringified; everything else is `None`.
pub fn argument_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The `(tool, arguments, requested fields)` triple resolved from a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedIntent {
    /// Name of the tool; must exist in the registry to be buildable
    pub tool_name: String,
    /// Arguments implied by the message
    pub arguments: Arguments,
    /// Fields the user asked to see (`["all"]` by default)
    pub requested_fields: Vec<String>,
}

impl DetectedIntent {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Arguments::new(),
            requested_fields: vec![ALL_FIELDS.to_string()],
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.requested_fields = if fields.is_empty() {
            vec![ALL_FIELDS.to_string()]
        } else {
            fields
        };
        self
    }
}
