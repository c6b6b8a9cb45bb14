#![forbid(unsafe_code)]

//! Rule definitions, the registry, and the built-in catalog

pub mod builtin;
mod definition;
mod registry;

// Re-export core types
pub use definition::{ExamplePair, RuleDefinition};
pub use registry::RuleSet;
