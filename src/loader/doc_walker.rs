//! Style-document discovery with gitignore support
//!
//! This module provides gitignore-aware walking of a documents root with
//! glob-based filtering, using the ignore crate. Only Markdown files are
//! surfaced; everything else in the tree is skipped.

use crate::error::LoadError;
use crate::types::GlobPattern;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Iterator source over discovered style documents
pub struct DocWalker {
    walker: ignore::Walk,
    include_set: Option<GlobSet>,
    exclude_set: GlobSet,
}

impl DocWalker {
    /// Creates a new DocWalker
    ///
    /// # Arguments
    /// * `root` - Root directory to walk
    /// * `include` - Include patterns (empty means include all Markdown files)
    /// * `exclude` - Exclude patterns (applied after include)
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidGlob` if a pattern does not compile.
    pub fn new(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, LoadError> {
        let walker = WalkBuilder::new(root)
            .hidden(false) // Don't skip hidden files by default
            .git_ignore(true) // Respect .gitignore
            .build();

        let include_set = if include.is_empty() {
            None
        } else {
            Some(build_globset(include)?)
        };

        // Always exclude .git directory, merging with user-provided excludes
        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));
        let exclude_set = build_globset(&exclude_patterns)?;

        Ok(Self {
            walker,
            include_set,
            exclude_set,
        })
    }

    /// Walks the directory tree and yields matching Markdown documents
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, LoadError>> {
        let include_set = self.include_set;
        let exclude_set = self.exclude_set;

        self.walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(LoadError::Walk(e))),
            };

            // Only process files (not directories)
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return None;
            }

            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("md") {
                return None;
            }

            // If include patterns are specified, path must match at least one
            if let Some(ref include_set) = include_set
                && !include_set.is_match(path)
            {
                return None;
            }

            if exclude_set.is_match(path) {
                return None;
            }

            Some(Ok(path.to_path_buf()))
        })
    }
}

/// Builds a GlobSet from patterns
fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.as_str()).map_err(|e| LoadError::InvalidGlob {
            pattern: pattern.as_str().to_string(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| LoadError::InvalidGlob {
        pattern: "<globset>".to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect_names(walker: DocWalker) -> Vec<String> {
        let mut names: Vec<String> = walker
            .walk()
            .map(|r| r.unwrap())
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_finds_markdown_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("typescript.md"), "Scope: typescript\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "not a doc").unwrap();
        fs::write(temp.path().join("rules.toml"), "[rule]").unwrap();

        let walker = DocWalker::new(temp.path(), &[], &[]).unwrap();
        assert_eq!(collect_names(walker), vec!["typescript.md"]);
    }

    #[test]
    fn test_walk_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("languages")).unwrap();
        fs::write(temp.path().join("general.md"), "").unwrap();
        fs::write(temp.path().join("languages/rust.md"), "").unwrap();
        fs::write(temp.path().join("languages/sql.md"), "").unwrap();

        let walker = DocWalker::new(temp.path(), &[], &[]).unwrap();
        assert_eq!(
            collect_names(walker),
            vec!["general.md", "rust.md", "sql.md"]
        );
    }

    #[test]
    fn test_walk_respects_include() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("guides")).unwrap();
        fs::create_dir_all(temp.path().join("internal")).unwrap();
        fs::write(temp.path().join("guides/kotlin.md"), "").unwrap();
        fs::write(temp.path().join("internal/swift.md"), "").unwrap();

        let include = vec![GlobPattern::new("**/guides/**")];
        let walker = DocWalker::new(temp.path(), &include, &[]).unwrap();
        assert_eq!(collect_names(walker), vec!["kotlin.md"]);
    }

    #[test]
    fn test_walk_respects_exclude() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("drafts")).unwrap();
        fs::write(temp.path().join("sql.md"), "").unwrap();
        fs::write(temp.path().join("drafts/sql.md"), "").unwrap();

        let exclude = vec![GlobPattern::new("**/drafts/**")];
        let walker = DocWalker::new(temp.path(), &[], &exclude).unwrap();
        assert_eq!(collect_names(walker), vec!["sql.md"]);
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let temp = TempDir::new().unwrap();
        let include = vec![GlobPattern::new("guides/[invalid")];
        let result = DocWalker::new(temp.path(), &include, &[]);
        assert!(matches!(result, Err(LoadError::InvalidGlob { .. })));
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp = TempDir::new().unwrap();
        let walker = DocWalker::new(temp.path(), &[], &[]).unwrap();
        assert!(collect_names(walker).is_empty());
    }
}
