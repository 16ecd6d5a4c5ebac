//! Translate Message use case
//!
//! The full pipeline for one incoming message:
//! 1. Resolve the intent ([`IntentResolver`], never fails)
//! 2. Build the document ([`QueryBuilder`], may run a secondary lookup)
//! 3. Execute it ([`GraphqlExecutor`])
//! 4. Shape the outcome ([`ResponseFormatter`])
//!
//! Build and execution failures end up in the response's `error` field;
//! nothing is returned as `Err`.

use super::build_query::QueryBuilder;
use super::format_response::{ResponseFormatter, TranslationResponse};
use super::resolve_intent::IntentResolver;
use crate::ports::classifier::IntentClassifier;
use crate::ports::graphql_executor::GraphqlExecutor;
use crate::ports::pipeline_logger::{NoPipelineLogger, PipelineEvent, PipelineLogger};
use nlq_domain::ToolRegistry;
use nlq_domain::util::preview;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for translating a message into an executed GraphQL request
pub struct TranslateMessageUseCase {
    registry: Arc<ToolRegistry>,
    resolver: IntentResolver,
    builder: QueryBuilder,
    executor: Arc<dyn GraphqlExecutor>,
    formatter: ResponseFormatter,
    logger: Arc<dyn PipelineLogger>,
}

impl Clone for TranslateMessageUseCase {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            resolver: self.resolver.clone(),
            builder: self.builder.clone(),
            executor: self.executor.clone(),
            formatter: self.formatter,
            logger: self.logger.clone(),
        }
    }
}

impl TranslateMessageUseCase {
    /// Create a use case resolving intents with keyword rules only
    pub fn new(registry: Arc<ToolRegistry>, executor: Arc<dyn GraphqlExecutor>) -> Self {
        Self {
            resolver: IntentResolver::new(registry.clone()),
            builder: QueryBuilder::new(registry.clone(), executor.clone()),
            registry,
            executor,
            formatter: ResponseFormatter,
            logger: Arc::new(NoPipelineLogger),
        }
    }

    /// Try the classifier before the keyword rules.
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.resolver = self.resolver.with_classifier(classifier);
        self
    }

    pub fn with_pipeline_logger(mut self, logger: Arc<dyn PipelineLogger>) -> Self {
        self.resolver = self.resolver.with_pipeline_logger(logger.clone());
        self.builder = self.builder.with_pipeline_logger(logger.clone());
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &IntentResolver {
        &self.resolver
    }

    pub async fn execute(&self, message: &str) -> TranslationResponse {
        info!("Received message: {}", preview(message, 100));
        self.logger.log(PipelineEvent::request_received(message));

        let intent = self.resolver.resolve(message).await.intent;

        let response = match self.builder.build(&intent).await {
            Ok(built) => {
                let result = self.executor.execute(&built.request).await;
                info!(
                    "Executed {} (success: {})",
                    built.request.operation_name, result.success
                );
                self.logger.log(PipelineEvent::execution_completed(
                    &built.request.operation_name,
                    result.is_success(),
                ));
                self.formatter
                    .executed(message, &intent, &built.request.document, &result)
            }
            Err(e) => {
                warn!("Could not build {}: {}", intent.tool_name, e);
                self.formatter.failed(message, &intent, &e)
            }
        };

        if response.is_error() {
            warn!(
                "Request for {} failed: {}",
                response.intent,
                response.error.as_deref().unwrap_or_default()
            );
        }
        self.logger.log(PipelineEvent::response_ready(
            &response.intent,
            response.error.as_deref(),
        ));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier::ClassifierError;
    use async_trait::async_trait;
    use nlq_domain::{ExecutionResult, GraphqlRequest, default_registry};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedExecutor {
        results: Mutex<VecDeque<ExecutionResult>>,
        requests: Mutex<Vec<GraphqlRequest>>,
    }

    impl ScriptedExecutor {
        fn new(results: Vec<ExecutionResult>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn operations(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.operation_name.clone())
                .collect()
        }
    }

    #[async_trait]
    impl GraphqlExecutor for ScriptedExecutor {
        async fn execute(&self, request: &GraphqlRequest) -> ExecutionResult {
            self.requests.lock().unwrap().push(request.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ExecutionResult::success(Value::Null))
        }
    }

    struct FixedClassifier(&'static str);

    #[async_trait]
    impl IntentClassifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn classify(&self, _system: &str, _user: &str) -> Result<String, ClassifierError> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl PipelineLogger for RecordingLogger {
        fn log(&self, event: PipelineEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn use_case(executor: Arc<ScriptedExecutor>) -> TranslateMessageUseCase {
        TranslateMessageUseCase::new(Arc::new(default_registry()), executor)
    }

    #[tokio::test]
    async fn test_electronics_products_end_to_end() {
        let products = json!([
            {"id": "1", "name": "Laptop", "category": "Electronics"},
            {"id": "2", "name": "Phone", "category": "Electronics"},
            {"id": "3", "name": "Monitor", "category": "Electronics"},
        ]);
        let executor = ScriptedExecutor::new(vec![ExecutionResult::success(
            json!({"productsByCategory": products}),
        )]);

        let response = use_case(executor.clone())
            .execute("show me electronics products")
            .await;

        assert_eq!(response.intent, "get_products");
        assert_eq!(response.arguments["category"], "Electronics");
        assert_eq!(response.error, None);
        assert_eq!(
            response.result.as_ref().unwrap()["productsByCategory"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert!(response.query.starts_with("query GetProductsByCategory"));

        let requests = executor.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            Value::Object(requests[0].variables.clone()),
            json!({"category": "Electronics"})
        );
    }

    #[tokio::test]
    async fn test_orders_for_unknown_name_end_to_end() {
        let executor = ScriptedExecutor::new(vec![ExecutionResult::success(
            json!({"searchCustomers": []}),
        )]);
        let use_case = use_case(executor.clone()).with_classifier(Arc::new(FixedClassifier(
            r#"{"tool": "get_customer_orders", "arguments": {"customerName": "Alice"}, "fields": ["all"]}"#,
        )));

        let response = use_case.execute("orders for Alice").await;

        assert!(response.error.as_deref().unwrap().contains("Alice"));
        assert_eq!(response.result, None);
        assert_eq!(response.query, "N/A");
        assert_eq!(executor.operations(), vec!["SearchCustomer"]);
    }

    #[tokio::test]
    async fn test_orders_for_known_name_keeps_original_arguments() {
        let executor = ScriptedExecutor::new(vec![
            ExecutionResult::success(json!({"searchCustomers": [{"id": "4", "name": "Alice"}]})),
            ExecutionResult::success(json!({"customer": {"id": "4", "orders": []}})),
        ]);
        let use_case = use_case(executor.clone()).with_classifier(Arc::new(FixedClassifier(
            r#"{"tool": "get_customer_orders", "arguments": {"customerName": "Alice"}}"#,
        )));

        let response = use_case.execute("orders for Alice").await;

        assert_eq!(response.error, None);
        assert_eq!(
            Value::Object(response.arguments.clone()),
            json!({"customerName": "Alice"})
        );
        assert!(response.query.starts_with("query GetCustomerOrders($id: ID!)"));
        assert_eq!(
            executor.operations(),
            vec!["SearchCustomer", "GetCustomerOrders"]
        );
        assert_eq!(executor.requests.lock().unwrap()[1].variables["id"], "4");
    }

    #[tokio::test]
    async fn test_create_order_without_items_never_executes() {
        let executor = ScriptedExecutor::new(vec![]);
        let response = use_case(executor.clone()).execute("create a new order").await;

        assert_eq!(response.intent, "create_order");
        assert_eq!(
            response.error.as_deref(),
            Some("Please specify items for the order")
        );
        assert!(executor.operations().is_empty());
    }

    #[tokio::test]
    async fn test_execution_failure_surfaces_in_payload() {
        let executor = ScriptedExecutor::new(vec![ExecutionResult::failure(
            "error sending request for url (http://localhost:4000/graphql)",
        )]);
        let response = use_case(executor).execute("list gold customers").await;

        assert_eq!(response.result, None);
        assert!(response.error.as_deref().unwrap().contains("error sending request"));
        assert!(response.query.starts_with("query GetCustomersByTier"));
    }

    #[tokio::test]
    async fn test_pipeline_events_in_order() {
        let executor = ScriptedExecutor::new(vec![ExecutionResult::success(json!({"ordersByStatus": []}))]);
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case(executor).with_pipeline_logger(logger.clone());

        use_case.execute("show shipped orders").await;

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "request_received",
                "strategy_selected",
                "document_built",
                "execution_completed",
                "response_ready",
            ]
        );
    }
}
