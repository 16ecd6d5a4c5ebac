//! Presentation layer for nlq
//!
//! This crate contains CLI definitions, console output formatting
//! and the HTTP API.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, verbosity_filter};
pub use output::console::ConsoleFormatter;
pub use server::{AppState, router, serve};
