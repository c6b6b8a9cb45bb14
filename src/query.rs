#![forbid(unsafe_code)]

//! StyleCatalog: the read-only query facade
//!
//! A StyleCatalog wraps a finished RuleSet and answers string-based queries
//! from consumers that do not hold typed scopes (a documentation site, a
//! lint-config generator). Queries never fail: an unknown scope or invalid
//! category produces an empty result, not an error.

use crate::rules::{RuleDefinition, RuleSet};
use crate::types::{Category, RuleId, Scope};

/// Read-only view over a loaded rule registry
///
/// Construction consumes the RuleSet; afterwards every access is `&self`,
/// so a catalog can be shared freely across threads.
#[derive(Debug)]
pub struct StyleCatalog {
    rules: RuleSet,
}

impl StyleCatalog {
    /// Wraps a finished RuleSet
    pub fn new(rules: RuleSet) -> Self {
        StyleCatalog { rules }
    }

    /// Iterates over the rules for a scope given as a string
    ///
    /// Unknown scopes yield an empty iterator.
    pub fn rules_for(&self, scope: &str) -> impl Iterator<Item = &RuleDefinition> {
        let scope = Scope::parse(scope);
        self.rules
            .all()
            .filter(move |rule| scope.is_some_and(|s| rule.scope() == s))
    }

    /// Iterates over the rules for a scope and category given as strings
    ///
    /// Unknown scopes or categories yield an empty iterator. Category
    /// matching is case-insensitive.
    pub fn rules_in(&self, scope: &str, category: &str) -> impl Iterator<Item = &RuleDefinition> {
        let scope = Scope::parse(scope);
        let category = Category::new(category.trim().to_ascii_lowercase());
        self.rules.all().filter(move |rule| {
            scope.is_some_and(|s| rule.scope() == s)
                && category.as_ref().is_some_and(|c| rule.category() == c)
        })
    }

    /// Looks up a single rule by scope and id strings
    pub fn lookup(&self, scope: &str, id: &str) -> Option<&RuleDefinition> {
        let scope = Scope::parse(scope)?;
        let id = RuleId::new(id)?;
        self.rules.get(scope, &id)
    }

    /// Iterates over every rule in registration order
    pub fn all(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.all()
    }

    /// Returns the scopes that have at least one rule, in first-seen order
    pub fn scopes(&self) -> Vec<Scope> {
        self.rules.scopes()
    }

    /// Returns the number of rules in the catalog
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn rule(id: &str, scope: Scope, category: &str) -> RuleDefinition {
        RuleDefinition::new(
            RuleId::new(id).unwrap(),
            scope,
            Category::new(category).unwrap(),
            Severity::Required,
            format!("{} rationale", id),
        )
        .unwrap()
    }

    fn sample_catalog() -> StyleCatalog {
        let mut set = RuleSet::new();
        set.register(rule("no-var", Scope::TypeScript, "variables"))
            .unwrap();
        set.register(rule("no-any", Scope::TypeScript, "types"))
            .unwrap();
        set.register(rule("no-select-star", Scope::Sql, "queries"))
            .unwrap();
        StyleCatalog::new(set)
    }

    #[test]
    fn test_rules_for_known_scope() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog
            .rules_for("typescript")
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["no-var", "no-any"]);
    }

    #[test]
    fn test_rules_for_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rules_for("TypeScript").count(), 2);
        assert_eq!(catalog.rules_for("  SQL ").count(), 1);
    }

    #[test]
    fn test_rules_for_unknown_scope_is_empty() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rules_for("cobol").count(), 0);
        assert_eq!(catalog.rules_for("").count(), 0);
    }

    #[test]
    fn test_rules_for_scope_without_rules_is_empty() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rules_for("kotlin").count(), 0);
    }

    #[test]
    fn test_rules_for_is_restartable() {
        let catalog = sample_catalog();
        let first: Vec<&str> = catalog
            .rules_for("typescript")
            .map(|r| r.id().as_str())
            .collect();
        let second: Vec<&str> = catalog
            .rules_for("typescript")
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rules_in_filters_by_category() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog
            .rules_in("typescript", "types")
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["no-any"]);

        assert_eq!(catalog.rules_in("typescript", "Types").count(), 1);
        assert_eq!(catalog.rules_in("typescript", "queries").count(), 0);
        assert_eq!(catalog.rules_in("typescript", "not a category").count(), 0);
    }

    #[test]
    fn test_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.lookup("sql", "no-select-star").is_some());
        assert!(catalog.lookup("rust", "no-select-star").is_none());
        assert!(catalog.lookup("sql", "absent").is_none());
        assert!(catalog.lookup("cobol", "no-select-star").is_none());
        assert!(catalog.lookup("sql", "not an id").is_none());
    }

    #[test]
    fn test_scopes_and_len() {
        let catalog = sample_catalog();
        assert_eq!(catalog.scopes(), vec![Scope::TypeScript, Scope::Sql]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = StyleCatalog::new(RuleSet::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.rules_for("rust").count(), 0);
        assert!(catalog.scopes().is_empty());
    }
}
