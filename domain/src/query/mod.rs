//! Query domain module
//!
//! Everything needed to turn a resolved intent into a GraphQL request and to
//! describe the outcome of running it:
//!
//! - [`selection`]: field projection over a tool's default field list
//! - [`document`]: rendered requests, build steps and symbolic lookups
//! - [`templates`]: per-tool document templates
//! - [`value_objects`]: the uniform [`ExecutionResult`](value_objects::ExecutionResult)
//!
//! Templates never interpolate user-supplied values into document text. Every
//! such value is declared as an operation variable and bound in
//! [`GraphqlRequest::variables`](document::GraphqlRequest::variables).

pub mod document;
pub mod selection;
pub mod templates;
pub mod value_objects;

pub use document::{BuildStep, GraphqlRequest, OperationKind, SecondaryLookup, SymbolicLookup};
pub use selection::{ALL_FIELDS, Field, FieldSelection};
pub use value_objects::{ExecutionError, ExecutionResult};
