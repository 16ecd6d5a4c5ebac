//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Array,
    Object,
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Array => "array",
            ParamType::Object => "object",
        }
    }

    /// Check whether a JSON value is acceptable for this type.
    ///
    /// Strings also accept numbers, since ids are frequently emitted as
    /// bare integers (`"customerId": 3`).
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string() || value.is_number(),
            ParamType::Number => value.is_number(),
            ParamType::Array => value.is_array(),
            ParamType::Object => value.is_object(),
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Parameter name (e.g. "customerId")
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Declared type
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Whether this parameter is required
    pub required: bool,
    /// Closed set of accepted values, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: ParamType::String,
            required,
            enum_values: None,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Find the canonical spelling of `value` in the enum set (case-insensitive).
    ///
    /// Returns `None` for parameters without an enum set.
    pub fn canonical_enum_value(&self, value: &str) -> Option<&str> {
        self.enum_values
            .as_ref()?
            .iter()
            .find(|v| v.eq_ignore_ascii_case(value.trim()))
            .map(|v| v.as_str())
    }
}

/// Specification of a single supported operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    /// Unique name of the tool (e.g. "get_products")
    pub name: String,
    /// Natural-language description, shown to the classifier
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ParameterSpec>,
    /// Groups of parameters of which at least one must be present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_one_of: Vec<Vec<String>>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            required_one_of: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        self.parameters.push(param);
        self
    }

    /// Require at least one of the named parameters to be present.
    pub fn requiring_one_of<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_one_of
            .push(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}
