//! Intent domain module
//!
//! A [`DetectedIntent`](entities::DetectedIntent) names the tool a message maps
//! to, the arguments it implies and the fields the user asked to see. Two pure
//! producers live here:
//!
//! - [`keyword`]: deterministic substring/pattern rules, always available
//! - [`parsing`]: interpretation and validation of a classifier's JSON reply
//!
//! Running them in order, calling the classifier, and recovering from its
//! failures is the application layer's job.

pub mod entities;
pub mod keyword;
pub mod parsing;

pub use entities::{Arguments, DetectedIntent};
