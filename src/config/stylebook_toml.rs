//! Parsing and validation for stylebook.toml configuration files

use crate::error::ConfigError;
use crate::types::{GlobPattern, RuleId, Scope, Severity};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration struct for stylebook.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stylebook metadata
    pub stylebook: StylebookMeta,

    /// Per-rule overrides
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate version
        if self.stylebook.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.stylebook.version
            )));
        }

        // Validate that at least one scope is specified
        if self.stylebook.scopes.is_empty() {
            return Err(ConfigError::Validation(
                "No scopes configured. Add scopes to stylebook.toml to start loading.".to_string(),
            ));
        }

        // Validate glob patterns by attempting to compile them with globset
        for pattern in &self.stylebook.include {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid include glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        for pattern in &self.stylebook.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// True if the given scope should be loaded
    ///
    /// `general` rules are always loaded; other scopes must be listed in
    /// the configuration.
    pub fn scope_enabled(&self, scope: Scope) -> bool {
        scope == Scope::General || self.stylebook.scopes.contains(&scope)
    }
}

impl Default for Config {
    /// A permissive configuration: every scope enabled, all Markdown
    /// documents included, built-in catalog on, no overrides.
    fn default() -> Self {
        Config {
            stylebook: StylebookMeta {
                version: "1".to_string(),
                scopes: Scope::all().to_vec(),
                include: default_include(),
                exclude: Vec::new(),
                builtin: default_builtin(),
            },
            rules: RulesConfig::default(),
        }
    }
}

/// Stylebook metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylebookMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Scopes to load rules for
    #[serde(default)]
    pub scopes: Vec<Scope>,

    /// Document patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,

    /// Document patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,

    /// Whether to load the built-in rule catalog
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("**/*.md")]
}

fn default_builtin() -> bool {
    true
}

/// Per-rule overrides from the `[rules]` table
///
/// Overrides apply uniformly to built-in and document-sourced rules; a rule
/// not mentioned here is enabled with its declared severity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule overrides keyed by rule id
    #[serde(flatten)]
    pub overrides: HashMap<RuleId, RuleValue>,
}

impl RulesConfig {
    /// True unless the rule is explicitly disabled
    pub fn is_enabled(&self, id: &RuleId) -> bool {
        match self.overrides.get(id) {
            Some(RuleValue::Enabled(enabled)) => *enabled,
            Some(RuleValue::Settings(_)) | None => true,
        }
    }

    /// Severity override for the rule, if one is configured
    pub fn severity_override(&self, id: &RuleId) -> Option<Severity> {
        match self.overrides.get(id) {
            Some(RuleValue::Settings(settings)) => settings.severity,
            _ => None,
        }
    }
}

/// A rule can be enabled with a boolean or configured with settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Simple boolean enable/disable
    Enabled(bool),
    /// Settings table for the rule
    Settings(RuleSettings),
}

/// Settings for individual rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Severity override for this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}
