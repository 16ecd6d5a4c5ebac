//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod classifier;
pub mod graphql_executor;
pub mod pipeline_logger;
