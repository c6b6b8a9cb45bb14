#![forbid(unsafe_code)]

//! RuleSet: the ordered, scope-keyed rule registry
//!
//! The RuleSet is responsible for:
//! - Holding every loaded RuleDefinition in insertion order
//! - Enforcing id uniqueness within each scope
//! - Serving scope- and category-filtered queries
//!
//! It is built once at load time; afterwards all access is through `&self`
//! and is safe for unsynchronized concurrent reads.

use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::rules::RuleDefinition;
use crate::types::{Category, RuleId, Scope};
use std::collections::{HashMap, HashSet};

/// Registry for storing and querying all rules
///
/// Rules live in a Vec so that `all()` preserves insertion order; a per-scope
/// index backs duplicate detection and id lookup.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<RuleDefinition>,
    index: HashMap<Scope, HashMap<RuleId, usize>>,
}

impl RuleSet {
    /// Create a new empty RuleSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::DuplicateId` if a rule with the same id already
    /// exists in the rule's scope. A failed registration leaves the registry
    /// unchanged.
    pub fn register(&mut self, rule: RuleDefinition) -> Result<(), RuleError> {
        let by_id = self.index.entry(rule.scope()).or_default();
        if by_id.contains_key(rule.id()) {
            return Err(RuleError::DuplicateId {
                scope: rule.scope(),
                id: rule.id().clone(),
            });
        }

        by_id.insert(rule.id().clone(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Registers a batch of rules, all-or-nothing
    ///
    /// Duplicates are checked up front, both against already-registered rules
    /// and within the batch itself; on any collision nothing is added.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::DuplicateId` naming the first colliding rule.
    pub fn register_all(
        &mut self,
        rules: impl IntoIterator<Item = RuleDefinition>,
    ) -> Result<(), RuleError> {
        let rules: Vec<RuleDefinition> = rules.into_iter().collect();

        {
            let mut staged: HashSet<(Scope, &RuleId)> = HashSet::new();
            for rule in &rules {
                let registered = self
                    .index
                    .get(&rule.scope())
                    .is_some_and(|by_id| by_id.contains_key(rule.id()));
                if registered || !staged.insert((rule.scope(), rule.id())) {
                    return Err(RuleError::DuplicateId {
                        scope: rule.scope(),
                        id: rule.id().clone(),
                    });
                }
            }
        }

        for rule in rules {
            self.register(rule)?;
        }
        Ok(())
    }

    /// Iterates over the rules registered for a scope, in insertion order
    ///
    /// Returns an empty iterator for scopes with no rules; never an error.
    pub fn rules_for(&self, scope: Scope) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.iter().filter(move |rule| rule.scope() == scope)
    }

    /// Iterates over the rules registered for a scope and category
    pub fn rules_in<'a>(
        &'a self,
        scope: Scope,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a RuleDefinition> {
        self.rules
            .iter()
            .filter(move |rule| rule.scope() == scope && rule.category() == category)
    }

    /// Looks up a rule by scope and id
    ///
    /// Returns `None` if the rule is not found in the registry.
    pub fn get(&self, scope: Scope, id: &RuleId) -> Option<&RuleDefinition> {
        let idx = *self.index.get(&scope)?.get(id)?;
        self.rules.get(idx)
    }

    /// Iterates over every registered rule in insertion order
    ///
    /// The order is identical across repeated calls.
    pub fn all(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.iter()
    }

    /// Returns the scopes that have at least one rule, in first-seen order
    pub fn scopes(&self) -> Vec<Scope> {
        let mut seen = HashSet::new();
        let mut scopes = Vec::new();
        for rule in &self.rules {
            if seen.insert(rule.scope()) {
                scopes.push(rule.scope());
            }
        }
        scopes
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies configuration overrides
    ///
    /// Removes rules disabled in the configuration and rewrites severities
    /// where an override is present. Rules not mentioned in the configuration
    /// are kept unchanged.
    pub fn apply_config(&mut self, config: &RulesConfig) {
        self.rules.retain(|rule| config.is_enabled(rule.id()));

        for rule in &mut self.rules {
            if let Some(severity) = config.severity_override(rule.id()) {
                rule.set_severity(severity);
            }
        }

        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (idx, rule) in self.rules.iter().enumerate() {
            self.index
                .entry(rule.scope())
                .or_default()
                .insert(rule.id().clone(), idx);
        }
    }
}
