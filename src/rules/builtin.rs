#![forbid(unsafe_code)]

//! Built-in rules embedded at compile time
//!
//! This module provides access to the built-in rule catalog that is compiled
//! into the library using `include_str!`. This ensures consumers get a working
//! catalog without shipping external rule files. Per-scope `scope-*` cargo
//! features compile out catalogs for scopes a consumer does not care about;
//! general rules are always present.

use crate::error::RuleError;
use crate::rules::RuleDefinition;

/// Embedded built-in rules for the general scope
const BUILTIN_GENERAL_RULES: &[(&str, &str)] = &[
    (
        "commit-subject-imperative",
        include_str!("../../builtin-rules/general/commit-subject-imperative.toml"),
    ),
    (
        "no-trailing-whitespace",
        include_str!("../../builtin-rules/general/no-trailing-whitespace.toml"),
    ),
    (
        "descriptive-identifiers",
        include_str!("../../builtin-rules/general/descriptive-identifiers.toml"),
    ),
];

/// Embedded built-in rules for TypeScript
#[cfg(feature = "scope-typescript")]
const BUILTIN_TYPESCRIPT_RULES: &[(&str, &str)] = &[
    (
        "no-var",
        include_str!("../../builtin-rules/typescript/no-var.toml"),
    ),
    (
        "no-any",
        include_str!("../../builtin-rules/typescript/no-any.toml"),
    ),
    (
        "explicit-return-types",
        include_str!("../../builtin-rules/typescript/explicit-return-types.toml"),
    ),
];

/// Embedded built-in rules for JavaScript
#[cfg(feature = "scope-javascript")]
const BUILTIN_JAVASCRIPT_RULES: &[(&str, &str)] = &[
    (
        "prefer-const",
        include_str!("../../builtin-rules/javascript/prefer-const.toml"),
    ),
    (
        "strict-equality",
        include_str!("../../builtin-rules/javascript/strict-equality.toml"),
    ),
];

/// Embedded built-in rules for Rust
#[cfg(feature = "scope-rust")]
const BUILTIN_RUST_RULES: &[(&str, &str)] = &[
    (
        "no-unwrap-in-libraries",
        include_str!("../../builtin-rules/rust/no-unwrap-in-libraries.toml"),
    ),
    (
        "snake-case-modules",
        include_str!("../../builtin-rules/rust/snake-case-modules.toml"),
    ),
    (
        "prefer-borrowed-parameters",
        include_str!("../../builtin-rules/rust/prefer-borrowed-parameters.toml"),
    ),
];

/// Embedded built-in rules for Kotlin
#[cfg(feature = "scope-kotlin")]
const BUILTIN_KOTLIN_RULES: &[(&str, &str)] = &[
    (
        "no-wildcard-imports",
        include_str!("../../builtin-rules/kotlin/no-wildcard-imports.toml"),
    ),
    (
        "data-classes-for-values",
        include_str!("../../builtin-rules/kotlin/data-classes-for-values.toml"),
    ),
];

/// Embedded built-in rules for SQL
#[cfg(feature = "scope-sql")]
const BUILTIN_SQL_RULES: &[(&str, &str)] = &[
    (
        "uppercase-keywords",
        include_str!("../../builtin-rules/sql/uppercase-keywords.toml"),
    ),
    (
        "no-select-star",
        include_str!("../../builtin-rules/sql/no-select-star.toml"),
    ),
    (
        "snake-case-identifiers",
        include_str!("../../builtin-rules/sql/snake-case-identifiers.toml"),
    ),
];

/// Embedded built-in rules for Swift
#[cfg(feature = "scope-swift")]
const BUILTIN_SWIFT_RULES: &[(&str, &str)] = &[
    (
        "no-force-unwrap",
        include_str!("../../builtin-rules/swift/no-force-unwrap.toml"),
    ),
    (
        "upper-camel-case-types",
        include_str!("../../builtin-rules/swift/upper-camel-case-types.toml"),
    ),
];

/// Load all built-in rules from embedded resources
///
/// Returns the rules in catalog order: general first, then per-scope catalogs
/// for every enabled `scope-*` feature.
///
/// # Errors
///
/// Returns `RuleError` if an embedded TOML file cannot be parsed or a rule
/// definition is invalid.
pub fn load_builtin_rules() -> Result<Vec<RuleDefinition>, RuleError> {
    let mut rules = Vec::new();

    collect(&mut rules, BUILTIN_GENERAL_RULES)?;

    #[cfg(feature = "scope-typescript")]
    collect(&mut rules, BUILTIN_TYPESCRIPT_RULES)?;

    #[cfg(feature = "scope-javascript")]
    collect(&mut rules, BUILTIN_JAVASCRIPT_RULES)?;

    #[cfg(feature = "scope-rust")]
    collect(&mut rules, BUILTIN_RUST_RULES)?;

    #[cfg(feature = "scope-kotlin")]
    collect(&mut rules, BUILTIN_KOTLIN_RULES)?;

    #[cfg(feature = "scope-sql")]
    collect(&mut rules, BUILTIN_SQL_RULES)?;

    #[cfg(feature = "scope-swift")]
    collect(&mut rules, BUILTIN_SWIFT_RULES)?;

    Ok(rules)
}

fn collect(rules: &mut Vec<RuleDefinition>, entries: &[(&str, &str)]) -> Result<(), RuleError> {
    for (rule_name, toml_content) in entries {
        let rule = RuleDefinition::from_toml(toml_content).map_err(|e| {
            RuleError::InvalidDefinition(format!(
                "Failed to parse built-in rule '{}': {}",
                rule_name, e
            ))
        })?;
        rules.push(rule);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scope;
    use std::collections::HashSet;

    #[test]
    fn test_load_builtin_rules() {
        let rules = load_builtin_rules().unwrap();

        // General rules are always present
        assert!(rules.len() >= 3);

        let rule_ids: Vec<&str> = rules.iter().map(|r| r.id().as_str()).collect();
        assert!(rule_ids.contains(&"commit-subject-imperative"));
        assert!(rule_ids.contains(&"no-trailing-whitespace"));
        assert!(rule_ids.contains(&"descriptive-identifiers"));

        #[cfg(feature = "scope-typescript")]
        assert!(rule_ids.contains(&"no-var"));

        #[cfg(feature = "scope-javascript")]
        assert!(rule_ids.contains(&"prefer-const"));

        #[cfg(feature = "scope-rust")]
        assert!(rule_ids.contains(&"no-unwrap-in-libraries"));

        #[cfg(feature = "scope-kotlin")]
        assert!(rule_ids.contains(&"no-wildcard-imports"));

        #[cfg(feature = "scope-sql")]
        assert!(rule_ids.contains(&"no-select-star"));

        #[cfg(feature = "scope-swift")]
        assert!(rule_ids.contains(&"no-force-unwrap"));
    }

    #[test]
    fn test_builtin_rules_are_valid() {
        let rules = load_builtin_rules().unwrap();

        for rule in &rules {
            assert!(!rule.rationale().trim().is_empty());
            assert!(!rule.examples().is_empty(), "rule '{}' has no examples", rule.id());
        }
    }

    #[test]
    fn test_builtin_ids_unique_per_scope() {
        let rules = load_builtin_rules().unwrap();

        let mut seen: HashSet<(Scope, &str)> = HashSet::new();
        for rule in &rules {
            assert!(
                seen.insert((rule.scope(), rule.id().as_str())),
                "duplicate built-in rule '{}' in scope '{}'",
                rule.id(),
                rule.scope()
            );
        }
    }

    #[test]
    fn test_general_rules_lead_the_catalog() {
        let rules = load_builtin_rules().unwrap();
        assert_eq!(rules[0].scope(), Scope::General);
    }
}
