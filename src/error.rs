//! Error types for Stylebook
//!
//! This module defines the error types used throughout Stylebook, following
//! a hierarchical structure with specific error variants for different
//! error categories. All failures are construction- or load-time; none are
//! retryable once the catalog is built.

use crate::types::{RuleId, Scope};
use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Syntax(#[from] toml::de::Error),

    /// Configuration failed semantic validation
    #[error("{0}")]
    Validation(String),

    /// I/O error while reading the configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Scope string is not one of the recognized scopes
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    /// A rule with this ID is already registered in the scope
    #[error("Duplicate rule ID '{id}' in scope '{scope}'")]
    DuplicateId { scope: Scope, id: RuleId },
}

/// Document loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Parse error in a style document
    #[error("Parse error in {} (line {line}): {message}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// A document produced an invalid or duplicate rule
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Invalid glob pattern for document matching
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    /// Error while walking the documents directory
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for Stylebook
#[derive(Debug, thiserror::Error)]
pub enum StylebookError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Load error
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}
