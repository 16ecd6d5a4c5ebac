//! GraphQL-over-HTTP wire types

use nlq_domain::{Arguments, GraphqlRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST body sent to the gateway
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestBody<'a> {
    pub query: &'a str,
    pub variables: &'a Arguments,
    pub operation_name: &'a str,
}

impl<'a> From<&'a GraphqlRequest> for RequestBody<'a> {
    fn from(request: &'a GraphqlRequest) -> Self {
        Self {
            query: &request.document,
            variables: &request.variables,
            operation_name: &request.operation_name,
        }
    }
}

/// Response body; both members may be absent
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

impl ResponseBody {
    /// The error list, if non-empty
    pub fn take_errors(&mut self) -> Option<Vec<Value>> {
        self.errors.take().filter(|errors| !errors.is_empty())
    }
}
