#![forbid(unsafe_code)]

//! Catalog assembly
//!
//! The Loader ties the pieces together: the built-in catalog, discovered
//! style documents, and configuration overrides, in that order. Loading is
//! all-or-nothing; any invalid document or duplicate rule aborts the whole
//! load and no partial registry escapes.

use crate::config::Config;
use crate::error::StylebookError;
use crate::loader::doc_walker::DocWalker;
use crate::loader::markdown;
use crate::query::StyleCatalog;
use crate::rules::{RuleSet, builtin};
use std::path::{Path, PathBuf};

/// Loads rule documents into a queryable catalog
#[derive(Debug, Clone)]
pub struct Loader {
    config: Config,
}

impl Loader {
    /// Creates a Loader with the given configuration
    pub fn new(config: Config) -> Self {
        Loader { config }
    }

    /// Creates a Loader from a stylebook.toml file
    pub fn from_config_path(path: &Path) -> Result<Self, StylebookError> {
        Ok(Loader::new(Config::load(path)?))
    }

    /// Returns the configuration this loader was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the catalog: built-in rules, then documents under `docs_root`
    ///
    /// Documents are registered in sorted path order so repeated loads of the
    /// same tree produce the same catalog. Scopes not enabled in the
    /// configuration are skipped. A missing documents root is not an error;
    /// the catalog is then built from the built-in rules alone.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, parse, or registration error; on any
    /// error the whole load is abandoned.
    pub fn load(&self, docs_root: &Path) -> Result<StyleCatalog, StylebookError> {
        let mut set = RuleSet::new();

        if self.config.stylebook.builtin {
            let rules = builtin::load_builtin_rules()?;
            set.register_all(
                rules
                    .into_iter()
                    .filter(|rule| self.config.scope_enabled(rule.scope())),
            )?;
        }

        if !docs_root.exists() {
            // Log warning but don't fail - missing directories are OK
            eprintln!(
                "Warning: Documents root does not exist: {}",
                docs_root.display()
            );
        } else {
            for path in self.discover(docs_root)? {
                let doc = markdown::load_document(&path)?;
                if !self.config.scope_enabled(doc.scope) {
                    continue;
                }
                set.register_all(doc.rules)?;
            }
        }

        set.apply_config(&self.config.rules);
        Ok(StyleCatalog::new(set))
    }

    /// Discovers style documents under the root, in sorted path order
    fn discover(&self, docs_root: &Path) -> Result<Vec<PathBuf>, StylebookError> {
        let walker = DocWalker::new(
            docs_root,
            &self.config.stylebook.include,
            &self.config.stylebook.exclude,
        )?;

        let mut paths = Vec::new();
        for path in walker.walk() {
            paths.push(path?);
        }
        paths.sort();
        Ok(paths)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new(Config::default())
    }
}
