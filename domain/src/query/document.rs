//! Rendered GraphQL requests and the steps that produce them.

use crate::intent::entities::{Arguments, argument_as_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }

    /// Queries may be safely re-sent; mutations may not.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, OperationKind::Query)
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A concrete document plus its variable bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub kind: OperationKind,
    pub operation_name: String,
    pub document: String,
    pub variables: Arguments,
}

impl GraphqlRequest {
    pub fn new(
        kind: OperationKind,
        operation_name: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            operation_name: operation_name.into(),
            document: document.into(),
            variables: Arguments::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// A name that must be resolved to an id before the main document can run
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicLookup {
    /// Entity label used in not-found messages (e.g. "Customer")
    pub entity: String,
    /// The human-readable value supplied by the user
    pub symbolic_key: String,
    /// Argument that receives the resolved id (e.g. "customerId")
    pub id_argument: String,
    /// Root field of the lookup response holding the match list
    pub result_field: String,
    /// The search request to execute
    pub request: GraphqlRequest,
}

impl SymbolicLookup {
    /// Extract the first match's id from the lookup response data.
    ///
    /// When several records share a name the first one wins.
    pub fn first_match_id(&self, data: &Value) -> Option<String> {
        data.get(&self.result_field)?
            .as_array()?
            .first()?
            .get("id")
            .and_then(argument_as_string)
    }

    /// Arguments for the main document, with the resolved id bound.
    pub fn resolved_arguments(&self, arguments: &Arguments, resolved_id: &str) -> Arguments {
        let mut resolved = arguments.clone();
        resolved.insert(
            self.id_argument.clone(),
            Value::String(resolved_id.to_string()),
        );
        resolved
    }
}

/// Result of rendering a template once
#[derive(Debug, Clone, PartialEq)]
pub enum BuildStep {
    /// The document is ready to execute
    Ready(GraphqlRequest),
    /// A symbolic argument must be resolved first
    Lookup(SymbolicLookup),
}

/// Record of a resolved symbolic argument, kept for one request only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryLookup {
    pub symbolic_key: String,
    pub resolved_id: String,
}
