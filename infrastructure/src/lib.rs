//! Infrastructure layer for nlq
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod classifier;
pub mod config;
pub mod graphql;
pub mod logging;

// Re-export commonly used types
pub use classifier::AnthropicClassifier;
pub use config::{
    ConfigLoader, ConfigValidationError, FileClassifierConfig, FileConfig, FileGatewayConfig,
    FileLoggingConfig, FileServerConfig,
};
pub use graphql::{GatewayClient, GatewayClientError};
pub use logging::{JsonlPipelineLogger, TracingPipelineLogger};
