#![forbid(unsafe_code)]

//! Core domain types for Stylebook
//!
//! This module defines the fundamental types used throughout the Stylebook system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contexts a style rule can apply to
///
/// `General` covers cross-language guidance such as naming and commit-message
/// conventions; the remaining variants are the languages the organization
/// maintains a style guide for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    General,
    TypeScript,
    JavaScript,
    Rust,
    Kotlin,
    Sql,
    Swift,
}

impl Scope {
    /// Returns all scopes in a fixed order
    pub fn all() -> [Scope; 7] {
        [
            Scope::General,
            Scope::TypeScript,
            Scope::JavaScript,
            Scope::Rust,
            Scope::Kotlin,
            Scope::Sql,
            Scope::Swift,
        ]
    }

    /// Parses a scope from an untrusted string, case-insensitively
    ///
    /// This is the only place a free-form scope string becomes a typed scope.
    /// Returns None for unrecognized scopes.
    pub fn parse(s: &str) -> Option<Scope> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Scope::General),
            "typescript" => Some(Scope::TypeScript),
            "javascript" => Some(Scope::JavaScript),
            "rust" => Some(Scope::Rust),
            "kotlin" => Some(Scope::Kotlin),
            "sql" => Some(Scope::Sql),
            "swift" => Some(Scope::Swift),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of the scope
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::General => "general",
            Scope::TypeScript => "typescript",
            Scope::JavaScript => "javascript",
            Scope::Rust => "rust",
            Scope::Kotlin => "kotlin",
            Scope::Sql => "sql",
            Scope::Swift => "swift",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How strongly a rule binds its readers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advisory,
    Required,
    Disallowed,
}

impl Severity {
    /// Parses a severity from an untrusted string, case-insensitively
    pub fn parse(s: &str) -> Option<Severity> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advisory" => Some(Severity::Advisory),
            "required" => Some(Severity::Required),
            "disallowed" => Some(Severity::Disallowed),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Advisory => "advisory",
            Severity::Required => "required",
            Severity::Disallowed => "disallowed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
/// IDs are unique per scope, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value).ok_or_else(|| "Invalid rule ID".to_string())
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// A validated rule category
///
/// Categories form an open set (naming, formatting, whitespace, error-handling, ...).
/// They must be non-empty and contain only lowercase ASCII letters, digits, and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Creates a new Category, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        if category.is_empty() {
            return None;
        }
        if !category
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return None;
        }
        Some(Category(category))
    }

    /// Returns the category as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::new(value).ok_or_else(|| "Invalid category".to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// A glob pattern for document matching
///
/// This is a simple wrapper around a string that will be used with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
