//! Gateway GraphQL client
//!
//! Implements the [`GraphqlExecutor`](nlq_application::GraphqlExecutor) port
//! over HTTP.

mod client;
mod wire;

pub use client::{GatewayClient, GatewayClientError};
