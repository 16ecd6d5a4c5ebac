//! Tool domain module
//!
//! This module defines the **Tool Registry**: the fixed catalog of backend
//! operations a user message can be translated into.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolRegistry │───▶│ ToolEntry    │───▶│ BuildStep    │
//! │ (by name)    │    │ spec+fields  │    │ (document or │
//! └──────────────┘    │ +template    │    │  lookup)     │
//!                     └──────────────┘    └──────────────┘
//! ```
//!
//! Each [`ToolEntry`](registry::ToolEntry) owns its [`ToolSpec`], its default
//! field list and its [`DocumentTemplate`](registry::DocumentTemplate). The
//! registry is built once at startup ([`catalog::default_registry`]) and is
//! read-only afterwards, so it can be shared freely between requests.
//!
//! # Key Types
//!
//! - [`ToolSpec`]: name, description and ordered [`ParameterSpec`](entities::ParameterSpec)s
//! - [`ToolRegistry`](registry::ToolRegistry): indexed table of entries, plus the browse tool
//! - [`ArgumentValidator`](validation::ArgumentValidator): checks arguments against a spec

pub mod catalog;
pub mod entities;
pub mod registry;
pub mod validation;

pub use entities::{ParamType, ParameterSpec, ToolSpec};
pub use registry::{ToolEntry, ToolRegistry};
