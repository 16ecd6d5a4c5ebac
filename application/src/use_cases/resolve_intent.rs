//! Resolve Intent use case
//!
//! Maps a free-text message to a [`DetectedIntent`] by running an ordered
//! chain of [`IntentStrategy`] implementations; the first success wins.
//!
//! ```text
//! message ──▶ ClassifierStrategy ──(fail)──▶ KeywordStrategy ──(fail)──▶ browse tool
//!                   │ ok                          │ ok
//!                   ▼                             ▼
//!              DetectedIntent               DetectedIntent
//! ```
//!
//! Resolution never fails outward. Strategy failures are logged and the
//! next strategy is tried; when none succeeds the registry's browse tool is
//! returned with empty arguments.

use crate::ports::classifier::{ClassifierError, IntentClassifier};
use crate::ports::pipeline_logger::{NoPipelineLogger, PipelineEvent, PipelineLogger};
use async_trait::async_trait;
use nlq_domain::tool::catalog::GET_PRODUCTS;
use nlq_domain::util::preview;
use nlq_domain::{
    ClassifierPromptTemplate, DetectedIntent, DomainError, ToolRegistry, detect_intent,
    parse_classifier_output,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name reported when no strategy produced an intent
pub const DEFAULT_STRATEGY: &str = "default";

/// Errors a single strategy may report; always recovered by the resolver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    InvalidOutput(#[from] DomainError),
}

/// One way of turning a message into an intent
#[async_trait]
pub trait IntentStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Unavailable strategies are skipped without counting as a failure
    fn is_available(&self) -> bool {
        true
    }

    async fn resolve(
        &self,
        message: &str,
        registry: &ToolRegistry,
    ) -> Result<DetectedIntent, ResolutionError>;
}

/// Asks an external classifier and validates its JSON reply
pub struct ClassifierStrategy {
    classifier: Arc<dyn IntentClassifier>,
}

impl ClassifierStrategy {
    pub fn new(classifier: Arc<dyn IntentClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl IntentStrategy for ClassifierStrategy {
    fn name(&self) -> &'static str {
        "classifier"
    }

    fn is_available(&self) -> bool {
        self.classifier.is_available()
    }

    async fn resolve(
        &self,
        message: &str,
        registry: &ToolRegistry,
    ) -> Result<DetectedIntent, ResolutionError> {
        let system_prompt = ClassifierPromptTemplate::system(registry);
        let user_message = ClassifierPromptTemplate::user_message(message);

        let reply = self
            .classifier
            .classify(&system_prompt, &user_message)
            .await?;
        debug!(
            "Classifier {} replied: {}",
            self.classifier.name(),
            preview(reply.trim(), 500)
        );

        Ok(parse_classifier_output(&reply, registry)?)
    }
}

/// Deterministic substring/pattern rules
pub struct KeywordStrategy;

#[async_trait]
impl IntentStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn resolve(
        &self,
        message: &str,
        _registry: &ToolRegistry,
    ) -> Result<DetectedIntent, ResolutionError> {
        Ok(detect_intent(message))
    }
}

/// An intent together with the strategy that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIntent {
    pub intent: DetectedIntent,
    pub strategy: &'static str,
}

/// Use case for resolving a message's intent
pub struct IntentResolver {
    registry: Arc<ToolRegistry>,
    strategies: Vec<Arc<dyn IntentStrategy>>,
    logger: Arc<dyn PipelineLogger>,
}

impl Clone for IntentResolver {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            strategies: self.strategies.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl IntentResolver {
    /// Create a resolver using only the keyword strategy
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self::with_strategies(registry, vec![Arc::new(KeywordStrategy)])
    }

    /// Create a resolver with an explicit strategy chain
    pub fn with_strategies(
        registry: Arc<ToolRegistry>,
        strategies: Vec<Arc<dyn IntentStrategy>>,
    ) -> Self {
        Self {
            registry,
            strategies,
            logger: Arc::new(NoPipelineLogger),
        }
    }

    /// Put a classifier strategy ahead of the existing chain
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.strategies
            .insert(0, Arc::new(ClassifierStrategy::new(classifier)));
        self
    }

    pub fn with_pipeline_logger(mut self, logger: Arc<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub async fn resolve(&self, message: &str) -> ResolvedIntent {
        for strategy in &self.strategies {
            if !strategy.is_available() {
                debug!("Skipping unavailable strategy: {}", strategy.name());
                continue;
            }

            match strategy.resolve(message, &self.registry).await {
                Ok(intent) => {
                    info!(
                        "Intent resolved by {} strategy: {}",
                        strategy.name(),
                        intent.tool_name
                    );
                    self.logger.log(PipelineEvent::strategy_selected(
                        strategy.name(),
                        &intent.tool_name,
                    ));
                    return ResolvedIntent {
                        intent,
                        strategy: strategy.name(),
                    };
                }
                Err(e) => {
                    warn!("{} strategy failed, falling back: {}", strategy.name(), e);
                    self.logger
                        .log(PipelineEvent::strategy_failed(strategy.name(), &e.to_string()));
                }
            }
        }

        let tool = self.registry.browse_tool().unwrap_or(GET_PRODUCTS);
        warn!("No strategy resolved the message, using {}", tool);
        self.logger
            .log(PipelineEvent::strategy_selected(DEFAULT_STRATEGY, tool));
        ResolvedIntent {
            intent: DetectedIntent::new(tool),
            strategy: DEFAULT_STRATEGY,
        }
    }
}
