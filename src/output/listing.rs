#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module renders a catalog for its two consumers: people (indented
//! plain text) and machines (one JSON object per line). Formatters return
//! strings; where the output goes is the caller's business.

use crate::query::StyleCatalog;
use crate::rules::RuleDefinition;
use serde::Serialize;

/// One row of a catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct RuleListing {
    pub rule_id: String,
    pub scope: String,
    pub category: String,
    pub severity: String,
    pub rationale: String,
    pub examples: usize,
}

impl RuleListing {
    /// Builds a listing row from a rule definition
    pub fn from_rule(rule: &RuleDefinition) -> Self {
        RuleListing {
            rule_id: rule.id().as_str().to_string(),
            scope: rule.scope().as_str().to_string(),
            category: rule.category().as_str().to_string(),
            severity: rule.severity().as_str().to_string(),
            rationale: rule.rationale().to_string(),
            examples: rule.examples().len(),
        }
    }

    /// Builds listing rows for a whole catalog, in registration order
    pub fn collect(catalog: &StyleCatalog) -> Vec<RuleListing> {
        catalog.all().map(RuleListing::from_rule).collect()
    }
}

/// Human-readable formatter for rule listings
pub struct ListingHumanFormatter;

impl ListingHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        ListingHumanFormatter
    }

    /// Format a list of rule listings for human consumption
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rules ({} registered):\n", listings.len()));
        output.push('\n');

        for listing in listings {
            output.push_str(&format!("{} ({})\n", listing.rule_id, listing.scope));
            output.push_str(&format!("  Category: {}\n", listing.category));
            output.push_str(&format!("  Severity: {}\n", listing.severity));
            output.push_str(&format!("  Rationale: {}\n", listing.rationale));
            output.push_str(&format!("  Examples: {}\n", listing.examples));
            output.push('\n');
        }

        output
    }
}

impl Default for ListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for rule listings
pub struct ListingJsonlFormatter;

impl ListingJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        ListingJsonlFormatter
    }

    /// Format a list of rule listings as JSONL
    ///
    /// Returns a string with one JSON object per line for each rule.
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut output = String::new();

        for listing in listings {
            if let Ok(json) = serde_json::to_string(listing) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for ListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
