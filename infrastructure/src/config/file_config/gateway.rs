//! Gateway configuration from TOML (`[gateway]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound accepted for `gateway.max_retries`
pub const MAX_GATEWAY_RETRIES: u32 = 10;

/// Federated GraphQL gateway settings
///
/// # Example
///
/// ```toml
/// [gateway]
/// url = "http://localhost:4000/graphql"
/// timeout_seconds = 30
/// max_retries = 0       # transport retries for queries; mutations never retry
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// GraphQL endpoint
    pub url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Extra attempts after a transport failure (queries only)
    pub max_retries: u32,
}

impl FileGatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4000/graphql".to_string(),
            timeout_seconds: 30,
            max_retries: 0,
        }
    }
}
