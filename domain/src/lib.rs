//! Domain layer for nlq
//!
//! This crate contains the pure translation logic between a free-text user
//! message and a GraphQL request against the federated gateway. It performs
//! no I/O: classifier calls, HTTP transport and logging live in the outer
//! layers.
//!
//! # Core Concepts
//!
//! ## Tool Registry
//!
//! Every supported backend operation is a registry entry that owns its
//! [`ToolSpec`] (name, description, typed parameters), its default field list
//! and its document template. Because the three travel together, a tool that
//! the resolver may emit is always a tool the builder knows how to render.
//!
//! ## Intent
//!
//! A [`DetectedIntent`] is the `(tool, arguments, requested fields)` triple
//! produced by either the keyword rules in [`intent::keyword`] or by parsing a
//! classifier response with [`intent::parsing`].
//!
//! ## Query documents
//!
//! Templates render a [`GraphqlRequest`] whose user-supplied values are always
//! bound variables. Tools addressed by a human-readable name first yield a
//! [`SymbolicLookup`] that must be resolved before the main document exists.

pub mod core;
pub mod intent;
pub mod prompt;
pub mod query;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use intent::{
    entities::{Arguments, DetectedIntent, argument_as_string},
    keyword::detect_intent,
    parsing::{parse_classifier_output, strip_code_fences},
};
pub use prompt::ClassifierPromptTemplate;
pub use query::{
    document::{BuildStep, GraphqlRequest, OperationKind, SecondaryLookup, SymbolicLookup},
    selection::{ALL_FIELDS, Field, FieldSelection},
    value_objects::{ExecutionError, ExecutionResult},
};
pub use tool::{
    catalog::default_registry,
    entities::{ParamType, ParameterSpec, ToolSpec},
    registry::{DocumentTemplate, ToolEntry, ToolRegistry},
    validation::{ArgumentValidator, SchemaArgumentValidator},
};
