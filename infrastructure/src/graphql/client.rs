//! HTTP client for the federated gateway

use super::wire::{RequestBody, ResponseBody};
use crate::config::FileGatewayConfig;
use async_trait::async_trait;
use nlq_application::ports::graphql_executor::GraphqlExecutor;
use nlq_domain::{ExecutionError, ExecutionResult, GraphqlRequest, OperationKind};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while constructing the client
#[derive(Error, Debug)]
pub enum GatewayClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// GraphQL client for the gateway endpoint
///
/// Every outcome becomes an [`ExecutionResult`]:
///
/// | Response | Result |
/// |----------|--------|
/// | `errors` present (even with `data`) | failure, messages joined with `", "` |
/// | non-2xx without `errors` | failure, `"HTTP <code> <reason>"` |
/// | 2xx with `data` | success |
/// | transport error / bad body | failure with the error text |
///
/// Transport failures of queries are retried up to `max_retries` times.
/// Mutations are sent once.
pub struct GatewayClient {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
}

impl GatewayClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            max_retries: 0,
        })
    }

    pub fn from_config(config: &FileGatewayConfig) -> Result<Self, GatewayClientError> {
        Ok(Self::new(&config.url, config.timeout())?.with_max_retries(config.max_retries))
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Total attempts allowed for an operation of this kind
    fn attempts_for(&self, kind: OperationKind) -> u32 {
        if kind.is_idempotent() {
            self.max_retries.saturating_add(1)
        } else {
            1
        }
    }

    /// Send once. `Err` is a transport failure that may be retried.
    async fn send(&self, request: &GraphqlRequest) -> Result<ExecutionResult, reqwest::Error> {
        let response = self
            .client
            .post(&self.url)
            .json(&RequestBody::from(request))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let mut body = match serde_json::from_str::<ResponseBody>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => ResponseBody::default(),
            Err(e) => {
                return Ok(ExecutionResult::failure(format!(
                    "Invalid response from gateway: {}",
                    e
                )));
            }
        };

        if let Some(errors) = body.take_errors() {
            return Ok(ExecutionResult::from_graphql_errors(errors));
        }

        if !status.is_success() {
            return Ok(ExecutionResult::failed(ExecutionError::new(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ))));
        }

        Ok(ExecutionResult::success(body.data.unwrap_or(Value::Null)))
    }
}

#[async_trait]
impl GraphqlExecutor for GatewayClient {
    async fn execute(&self, request: &GraphqlRequest) -> ExecutionResult {
        let attempts = self.attempts_for(request.kind);
        let mut last_error = String::from("Gateway request failed");

        for attempt in 1..=attempts {
            debug!(
                "Sending {} to {} (attempt {}/{})",
                request.operation_name, self.url, attempt, attempts
            );
            match self.send(request).await {
                Ok(result) => return result,
                Err(e) => {
                    warn!(
                        "Gateway request {} failed (attempt {}/{}): {}",
                        request.operation_name, attempt, attempts, e
                    );
                    last_error = e.to_string();
                }
            }
        }

        ExecutionResult::failure(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn products_request() -> GraphqlRequest {
        GraphqlRequest::new(
            OperationKind::Query,
            "GetProductsByCategory",
            "query GetProductsByCategory($category: String!) { productsByCategory(category: $category) { id } }",
        )
        .with_variable("category", "Electronics")
    }

    fn client(url: String) -> GatewayClient {
        GatewayClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_data() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "query": products_request().document,
                "variables": {"category": "Electronics"},
                "operationName": "GetProductsByCategory",
            })))
            .with_status(200)
            .with_body(r#"{"data": {"productsByCategory": [{"id": "1"}, {"id": "2"}]}}"#)
            .create_async()
            .await;

        let result = client(format!("{}/graphql", server.url()))
            .execute(&products_request())
            .await;

        assert!(result.is_success());
        assert_eq!(
            result.data,
            Some(json!({"productsByCategory": [{"id": "1"}, {"id": "2"}]}))
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_errors_list_fails_even_with_data() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(
                json!({
                    "data": {"products": null},
                    "errors": [
                        {"message": "Subgraph products unavailable", "path": ["products"]},
                        {"message": "Timeout"},
                    ],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let result = client(format!("{}/graphql", server.url()))
            .execute(&products_request())
            .await;

        assert!(!result.is_success());
        assert!(result.data.is_none());
        let error = result.error.unwrap();
        assert_eq!(error.message, "Subgraph products unavailable, Timeout");
        assert_eq!(error.details.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_http_status_without_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let result = client(format!("{}/graphql", server.url()))
            .execute(&products_request())
            .await;

        assert_eq!(result.error_message(), Some("HTTP 502 Bad Gateway"));
    }

    #[tokio::test]
    async fn test_http_status_with_errors_prefers_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(400)
            .with_body(r#"{"errors": [{"message": "Variable \"$category\" of required type \"String!\" was not provided."}]}"#)
            .create_async()
            .await;

        let result = client(format!("{}/graphql", server.url()))
            .execute(&products_request())
            .await;

        assert!(result.error_message().unwrap().contains("$category"));
        assert!(result.error.unwrap().details.is_some());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let result = client(format!("{}/graphql", server.url()))
            .execute(&products_request())
            .await;

        assert!(!result.is_success());
        assert!(result.error_message().unwrap().starts_with("Invalid response"));
        assert!(result.error.unwrap().details.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let result = client("http://127.0.0.1:1/graphql".to_string())
            .with_max_retries(2)
            .execute(&products_request())
            .await;

        assert!(!result.is_success());
        assert!(!result.error_message().unwrap().is_empty());
        assert!(result.error.unwrap().details.is_none());
    }

    #[test]
    fn test_mutations_are_not_retried() {
        let client = client("http://localhost:4000/graphql".to_string()).with_max_retries(3);
        assert_eq!(client.attempts_for(OperationKind::Query), 4);
        assert_eq!(client.attempts_for(OperationKind::Mutation), 1);
    }

    #[test]
    fn test_retry_count_saturates() {
        let client = client("http://localhost:4000/graphql".to_string()).with_max_retries(u32::MAX);
        assert_eq!(client.attempts_for(OperationKind::Query), u32::MAX);
    }

    #[test]
    fn test_from_config() {
        let config = FileGatewayConfig {
            max_retries: 2,
            ..Default::default()
        };
        let client = GatewayClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://localhost:4000/graphql");
        assert_eq!(client.attempts_for(OperationKind::Query), 3);
    }
}
