//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional log destinations
///
/// # Example
///
/// ```toml
/// [logging]
/// file = "nlq.log"                  # tracing output, appended
/// pipeline_log = "pipeline.jsonl"   # one JSON object per pipeline event
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_log: Option<PathBuf>,
}
