#![forbid(unsafe_code)]

//! RuleDefinition: the immutable value describing one style rule
//!
//! Rules are constructed once at load time, from TOML rule files or from
//! Markdown style documents, and never mutated afterwards. All string
//! validation happens here; once a RuleDefinition exists, its fields are
//! known-good.

use crate::error::RuleError;
use crate::types::{Category, RuleId, Scope, Severity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A good/bad snippet pair illustrating a rule
///
/// At least one side must be present and non-blank. Single-sided pairs are
/// common: a bad snippet with no replacement, or a good snippet shown alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePair {
    /// Snippet violating the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad: Option<String>,

    /// Snippet following the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
}

impl ExamplePair {
    /// Creates a pair from optional sides without validation
    ///
    /// Validation happens when the pair is attached to a RuleDefinition.
    pub fn new(bad: Option<String>, good: Option<String>) -> Self {
        ExamplePair { bad, good }
    }

    /// True if neither side carries a non-blank snippet
    pub fn is_blank(&self) -> bool {
        let has = |side: &Option<String>| side.as_deref().is_some_and(|s| !s.trim().is_empty());
        !has(&self.bad) && !has(&self.good)
    }
}

/// TOML structure for rule definition files
///
/// This structure is deserialized from TOML files in builtin-rules/ or from
/// user-provided rule files.
#[derive(Debug, Deserialize)]
struct RuleFile {
    rule: RuleSection,
    #[serde(default, rename = "example")]
    examples: Vec<ExamplePair>,
}

#[derive(Debug, Deserialize)]
struct RuleSection {
    id: String,
    scope: String,
    category: String,
    severity: Severity,
    rationale: String,
}

/// A single style rule: what it applies to, how strongly, and why
///
/// Fields are private; a constructed RuleDefinition is immutable from the
/// outside. Severity overrides during config application go through a
/// crate-private setter before the catalog freezes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDefinition {
    id: RuleId,
    scope: Scope,
    category: Category,
    severity: Severity,
    rationale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    examples: Vec<ExamplePair>,
}

impl RuleDefinition {
    /// Creates a new rule from already-typed parts
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the rationale is blank.
    pub fn new(
        id: RuleId,
        scope: Scope,
        category: Category,
        severity: Severity,
        rationale: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let rationale = rationale.into();
        if rationale.trim().is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "Rule '{}' has an empty rationale",
                id
            )));
        }

        Ok(RuleDefinition {
            id,
            scope,
            category,
            severity,
            rationale,
            examples: Vec::new(),
        })
    }

    /// Attaches example pairs, validating each
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if any pair is blank on both sides.
    pub fn with_examples(mut self, examples: Vec<ExamplePair>) -> Result<Self, RuleError> {
        for example in &examples {
            if example.is_blank() {
                return Err(RuleError::InvalidDefinition(format!(
                    "Rule '{}' has an example with neither a good nor a bad snippet",
                    self.id
                )));
            }
        }
        self.examples = examples;
        Ok(self)
    }

    /// Parses a RuleDefinition from TOML content
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if:
    /// - TOML syntax is invalid
    /// - Required fields are missing
    /// - Rule ID or category is invalid
    /// - The severity is not one of the enumerated values
    ///
    /// Returns `RuleError::UnknownScope` if the scope string is unrecognized.
    pub fn from_toml(content: &str) -> Result<Self, RuleError> {
        let file: RuleFile = toml::from_str(content)
            .map_err(|e| RuleError::InvalidDefinition(format!("Failed to parse TOML: {}", e)))?;

        let id = RuleId::new(file.rule.id.clone()).ok_or_else(|| {
            RuleError::InvalidDefinition(format!("Invalid rule ID: {}", file.rule.id))
        })?;

        let scope = Scope::parse(&file.rule.scope)
            .ok_or_else(|| RuleError::UnknownScope(file.rule.scope.clone()))?;

        let category = Category::new(file.rule.category.clone()).ok_or_else(|| {
            RuleError::InvalidDefinition(format!("Invalid category: {}", file.rule.category))
        })?;

        Self::new(id, scope, category, file.rule.severity, file.rule.rationale)?
            .with_examples(file.examples)
    }

    /// Parses a RuleDefinition from a TOML file path
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::InvalidDefinition(format!("Failed to read file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Returns the unique identifier for this rule
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    /// Returns the scope this rule applies to
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the category this rule belongs to
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns how strongly this rule binds
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable rationale
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// Returns the example pairs illustrating this rule
    pub fn examples(&self) -> &[ExamplePair] {
        &self.examples
    }

    // Config severity overrides run while the registry is still being
    // assembled, before any catalog hands out references.
    pub(crate) fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }
}
