#![forbid(unsafe_code)]

//! Stylebook: a machine-readable registry for organization coding-style rules
//!
//! Stylebook loads style conventions from Markdown documents and TOML rule
//! files into an immutable, scope-keyed registry, and answers read-only
//! queries over it. It does not lint source code; the crate stops at the
//! rule metadata boundary.

pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod query;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, LoadError, RuleError, StylebookError};

// Re-export core domain types for convenient access
pub use query::StyleCatalog;
pub use rules::{ExamplePair, RuleDefinition, RuleSet};
pub use types::{Category, GlobPattern, RuleId, Scope, Severity};
