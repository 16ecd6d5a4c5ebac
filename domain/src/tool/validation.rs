//! Argument validation against tool specs
//!
//! Pure domain logic with no I/O. Used to vet classifier output before it is
//! allowed anywhere near a document template.

use super::entities::{ParamType, ToolSpec};
use crate::core::error::DomainError;
use crate::intent::entities::Arguments;
use serde_json::Value;

/// Validator for tool arguments
pub trait ArgumentValidator {
    /// Validate `arguments` against `spec`, returning the normalized set.
    fn validate(&self, arguments: &Arguments, spec: &ToolSpec) -> Result<Arguments, DomainError>;
}

/// Validates arguments against the declared parameter schema.
///
/// - `null`, empty-string and undeclared arguments are dropped
/// - required parameters and `required_one_of` groups must be present
/// - values must match the declared [`ParamType`]
/// - enum values are matched case-insensitively and rewritten to their
///   canonical spelling
#[derive(Debug, Clone, Default)]
pub struct SchemaArgumentValidator;

impl ArgumentValidator for SchemaArgumentValidator {
    fn validate(&self, arguments: &Arguments, spec: &ToolSpec) -> Result<Arguments, DomainError> {
        let mut normalized = Arguments::new();

        for param in &spec.parameters {
            let Some(value) = arguments.get(&param.name) else {
                continue;
            };
            if is_blank(value) {
                continue;
            }

            if !param.param_type.accepts(value) {
                return Err(DomainError::validation(format!(
                    "Parameter '{}' for tool '{}' must be of type {}",
                    param.name, spec.name, param.param_type
                )));
            }

            let value = match (&param.enum_values, param.param_type, value) {
                (Some(allowed), ParamType::String, Value::String(s)) => {
                    match param.canonical_enum_value(s) {
                        Some(canonical) => Value::String(canonical.to_string()),
                        None => {
                            return Err(DomainError::validation(format!(
                                "Invalid value '{}' for parameter '{}' (expected one of: {})",
                                s,
                                param.name,
                                allowed.join(", ")
                            )));
                        }
                    }
                }
                _ => value.clone(),
            };

            normalized.insert(param.name.clone(), value);
        }

        for param in spec.required_parameters() {
            if !normalized.contains_key(&param.name) {
                return Err(DomainError::validation(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, spec.name
                )));
            }
        }

        for group in &spec.required_one_of {
            if !group.iter().any(|name| normalized.contains_key(name)) {
                return Err(DomainError::validation(format!(
                    "Tool '{}' requires one of: {}",
                    spec.name,
                    group.join(", ")
                )));
            }
        }

        Ok(normalized)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
