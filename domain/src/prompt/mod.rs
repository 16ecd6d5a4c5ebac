//! Prompt domain
//!
//! Instruction text sent to the intent classifier, generated from the tool
//! registry so the two cannot drift apart.

mod classifier;

pub use classifier::ClassifierPromptTemplate;
