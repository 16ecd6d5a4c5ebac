//! Pipeline events as `tracing` records

use nlq_application::ports::pipeline_logger::{PipelineEvent, PipelineLogger};
use tracing::{debug, info};

/// Forwards pipeline events to the `nlq::pipeline` tracing target.
///
/// Completion events are logged at `info`, intermediate steps at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPipelineLogger;

impl PipelineLogger for TracingPipelineLogger {
    fn log(&self, event: PipelineEvent) {
        match event.event_type {
            "execution_completed" | "response_ready" | "strategy_failed" => {
                info!(target: "nlq::pipeline", event = event.event_type, "{}", event.payload)
            }
            _ => debug!(target: "nlq::pipeline", event = event.event_type, "{}", event.payload),
        }
    }
}
