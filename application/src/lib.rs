//! Application layer for nlq
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    classifier::{ClassifierError, IntentClassifier},
    graphql_executor::GraphqlExecutor,
    pipeline_logger::{NoPipelineLogger, PipelineEvent, PipelineLogger},
};
pub use use_cases::build_query::{BuiltQuery, QueryBuilder, TranslateError};
pub use use_cases::format_response::{NO_QUERY, ResponseFormatter, TranslationResponse};
pub use use_cases::resolve_intent::{
    ClassifierStrategy, IntentResolver, IntentStrategy, KeywordStrategy, ResolutionError,
    ResolvedIntent,
};
pub use use_cases::translate_message::TranslateMessageUseCase;
