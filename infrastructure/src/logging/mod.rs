//! Logging infrastructure: structured pipeline logging.
//!
//! Provides two [`PipelineLogger`](nlq_application::PipelineLogger) adapters:
//! [`JsonlPipelineLogger`] appends one JSON line per event to a file, and
//! [`TracingPipelineLogger`] forwards events to `tracing`.

mod jsonl_logger;
mod tracing_logger;

pub use jsonl_logger::JsonlPipelineLogger;
pub use tracing_logger::TracingPipelineLogger;
