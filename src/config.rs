//! Configuration file parsing and validation

pub mod stylebook_toml;

pub use stylebook_toml::{Config, RuleSettings, RuleValue, RulesConfig, StylebookMeta};
