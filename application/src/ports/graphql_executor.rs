//! GraphQL executor port
//!
//! Defines the interface for sending rendered documents to the gateway.

use async_trait::async_trait;
use nlq_domain::{ExecutionResult, GraphqlRequest};

/// Port for executing GraphQL requests
///
/// Never fails outward: transport and application-level errors are both
/// reported through [`ExecutionResult`] with `success == false`.
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    async fn execute(&self, request: &GraphqlRequest) -> ExecutionResult;
}
