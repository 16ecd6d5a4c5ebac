//! Intent classifier adapters
//!
//! Implements the [`IntentClassifier`](nlq_application::IntentClassifier) port.

mod anthropic;

pub use anthropic::AnthropicClassifier;
