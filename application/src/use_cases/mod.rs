//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_query;
pub mod format_response;
pub mod resolve_intent;
pub mod translate_message;
