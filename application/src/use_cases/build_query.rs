//! Build Query use case
//!
//! Turns a [`DetectedIntent`] into a ready-to-run [`GraphqlRequest`].
//!
//! Most tools render in a single step. Tools addressed by a human-readable
//! name render a [`SymbolicLookup`] first; the lookup is executed through the
//! [`GraphqlExecutor`] and the first match's id is bound before the main
//! document is rendered. A lookup with no matches fails the build, so the
//! main document never runs with an unresolved key.

use crate::ports::graphql_executor::GraphqlExecutor;
use crate::ports::pipeline_logger::{NoPipelineLogger, PipelineEvent, PipelineLogger};
use nlq_domain::{
    BuildStep, DetectedIntent, DomainError, ExecutionError, GraphqlRequest, SecondaryLookup,
    ToolRegistry,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop a request before its main document is executed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Unknown tool, failed validation or unresolved symbolic key
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The secondary lookup itself could not be executed
    #[error("{0}")]
    LookupFailed(ExecutionError),
}

/// A rendered main document plus the lookup that preceded it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub request: GraphqlRequest,
    pub secondary_lookup: Option<SecondaryLookup>,
}

impl BuiltQuery {
    pub fn secondary_lookup_performed(&self) -> bool {
        self.secondary_lookup.is_some()
    }
}

/// Use case for building GraphQL requests from intents
pub struct QueryBuilder {
    registry: Arc<ToolRegistry>,
    executor: Arc<dyn GraphqlExecutor>,
    logger: Arc<dyn PipelineLogger>,
}

impl Clone for QueryBuilder {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            executor: self.executor.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl QueryBuilder {
    pub fn new(registry: Arc<ToolRegistry>, executor: Arc<dyn GraphqlExecutor>) -> Self {
        Self {
            registry,
            executor,
            logger: Arc::new(NoPipelineLogger),
        }
    }

    pub fn with_pipeline_logger(mut self, logger: Arc<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn build(&self, intent: &DetectedIntent) -> Result<BuiltQuery, TranslateError> {
        let entry = self.registry.entry(&intent.tool_name)?;

        let built = match entry.render(&intent.arguments, &intent.requested_fields)? {
            BuildStep::Ready(request) => BuiltQuery {
                request,
                secondary_lookup: None,
            },
            BuildStep::Lookup(lookup) => {
                info!(
                    "Resolving {} \"{}\" before {}",
                    lookup.entity, lookup.symbolic_key, intent.tool_name
                );
                let result = self.executor.execute(&lookup.request).await;
                self.logger.log(PipelineEvent::execution_completed(
                    &lookup.request.operation_name,
                    result.is_success(),
                ));

                if !result.is_success() {
                    let error = result
                        .error
                        .unwrap_or_else(|| ExecutionError::new("Lookup failed"));
                    return Err(TranslateError::LookupFailed(error));
                }

                let resolved_id = result
                    .data()
                    .and_then(|data| lookup.first_match_id(data))
                    .ok_or_else(|| {
                        DomainError::lookup_not_found(&lookup.entity, &lookup.symbolic_key)
                    })?;
                debug!("Resolved \"{}\" to id {}", lookup.symbolic_key, resolved_id);

                let arguments = lookup.resolved_arguments(&intent.arguments, &resolved_id);
                match entry.render(&arguments, &intent.requested_fields)? {
                    BuildStep::Ready(request) => BuiltQuery {
                        request,
                        secondary_lookup: Some(SecondaryLookup {
                            symbolic_key: lookup.symbolic_key,
                            resolved_id,
                        }),
                    },
                    BuildStep::Lookup(again) => {
                        return Err(DomainError::validation(format!(
                            "{} \"{}\" could not be resolved to an id",
                            again.entity, again.symbolic_key
                        ))
                        .into());
                    }
                }
            }
        };

        info!(
            "Built {} {}",
            built.request.kind, built.request.operation_name
        );
        self.logger.log(PipelineEvent::document_built(
            &built.request.operation_name,
            built.request.kind.as_str(),
            built.secondary_lookup_performed(),
        ));
        Ok(built)
    }
}
