//! Configuration file loading for nlq
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NLQ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./nlq.toml` or `./.nlq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nlq/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClassifierConfig, FileConfig, FileGatewayConfig,
    FileLoggingConfig, FileServerConfig, MAX_GATEWAY_RETRIES,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
