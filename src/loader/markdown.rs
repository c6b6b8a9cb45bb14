#![forbid(unsafe_code)]

//! Markdown style-document parsing
//!
//! Style documents are Markdown files following a light convention:
//!
//! - A `Scope: <scope>` line, before any rule section, fixes the scope for
//!   every rule in the document. When absent, the file stem is tried
//!   (`typescript.md` implies the typescript scope).
//! - Each `##` heading opens a section. Sections carrying `Category:` and
//!   `Severity:` metadata lines are rule sections; the heading text is the
//!   rule id. Sections without metadata are prose and are skipped.
//! - Remaining prose in a rule section becomes the rationale.
//! - Fenced code blocks whose info string ends in `bad` or `good` (for
//!   example ```` ```ts bad ````) become example snippets; a `bad` fence
//!   followed by a `good` fence forms one pair.
//!
//! Parsing is line-based. Malformed sections fail with a position-carrying
//! `LoadError::Parse`; a document either parses completely or not at all.

use crate::error::LoadError;
use crate::rules::{ExamplePair, RuleDefinition};
use crate::types::{Category, RuleId, Scope, Severity};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+(.+?)\s*$").expect("static pattern"));
static SCOPE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Ss]cope:\s*(\S+)\s*$").expect("static pattern"));
static METADATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Category|Severity):\s*(.+?)\s*$").expect("static pattern"));
static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```\s*(.*)$").expect("static pattern"));

/// A parsed style document: one scope and its rules in document order
#[derive(Debug)]
pub struct StyleDocument {
    /// Path the document was parsed from
    pub source: PathBuf,

    /// Scope shared by every rule in the document
    pub scope: Scope,

    /// Rules in document order
    pub rules: Vec<RuleDefinition>,
}

/// Which side of an example pair a fence contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Good,
    Bad,
}

/// An open fenced code block being accumulated
struct OpenFence {
    side: Option<Side>,
    open_line: usize,
    content: Vec<String>,
}

/// A `##` section as scanned, before rule construction
struct Section {
    heading: String,
    heading_line: usize,
    category: Option<(String, usize)>,
    severity: Option<(String, usize)>,
    rationale: Vec<String>,
    examples: Vec<ExamplePair>,
    pending_bad: Option<String>,
}

impl Section {
    fn new(heading: String, heading_line: usize) -> Self {
        Section {
            heading,
            heading_line,
            category: None,
            severity: None,
            rationale: Vec::new(),
            examples: Vec::new(),
            pending_bad: None,
        }
    }

    fn accept_fence(&mut self, side: Side, content: String) {
        match side {
            Side::Bad => {
                if let Some(previous) = self.pending_bad.take() {
                    self.examples.push(ExamplePair::new(Some(previous), None));
                }
                self.pending_bad = Some(content);
            }
            Side::Good => {
                let bad = self.pending_bad.take();
                self.examples.push(ExamplePair::new(bad, Some(content)));
            }
        }
    }

    /// Flushes a trailing unpaired bad fence into a single-sided example
    fn complete(&mut self) {
        if let Some(bad) = self.pending_bad.take() {
            self.examples.push(ExamplePair::new(Some(bad), None));
        }
    }
}

/// Reads and parses a style document from disk
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Parse`
/// on any document malformation.
pub fn load_document(path: &Path) -> Result<StyleDocument, LoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, path)
}

/// Parses a style document from already-loaded content
///
/// `source` names the document in errors and supplies the file-stem scope
/// fallback.
///
/// # Errors
///
/// Returns `LoadError::Parse` if:
/// - The document declares no scope and the file stem is not a scope
/// - A scope declaration is unknown, conflicting, or placed after a section
/// - A rule section has an invalid id, a missing or duplicate metadata line,
///   an unknown severity, an empty rationale, or a duplicate id
/// - A code fence is left unterminated
pub fn parse_document(content: &str, source: &Path) -> Result<StyleDocument, LoadError> {
    let (declared_scope, sections) = scan(content, source)?;

    let scope = declared_scope
        .or_else(|| {
            source
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Scope::parse)
        })
        .ok_or_else(|| parse_err(source, 1, "Document does not declare a scope"))?;

    let mut rules = Vec::new();
    let mut seen_ids: HashSet<RuleId> = HashSet::new();
    for section in sections {
        let heading_line = section.heading_line;
        if let Some(rule) = build_rule(section, scope, source)? {
            if !seen_ids.insert(rule.id().clone()) {
                return Err(parse_err(
                    source,
                    heading_line,
                    format!("Duplicate rule id '{}' in document", rule.id()),
                ));
            }
            rules.push(rule);
        }
    }

    Ok(StyleDocument {
        source: source.to_path_buf(),
        scope,
        rules,
    })
}

/// First pass: split the document into a scope declaration and raw sections
fn scan(content: &str, source: &Path) -> Result<(Option<Scope>, Vec<Section>), LoadError> {
    let mut scope: Option<Scope> = None;
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut fence: Option<OpenFence> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        // Inside a fence everything is content until the closing marker
        if fence.is_some() {
            if line.trim() == "```" {
                if let Some(open) = fence.take()
                    && let (Some(section), Some(side)) = (current.as_mut(), open.side)
                {
                    section.accept_fence(side, open.content.join("\n"));
                }
            } else if let Some(open) = fence.as_mut() {
                open.content.push(line.to_string());
            }
            continue;
        }

        if let Some(caps) = FENCE_OPEN.captures(line) {
            fence = Some(OpenFence {
                side: parse_side(&caps[1]),
                open_line: line_no,
                content: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            if let Some(mut finished) = current.take() {
                finished.complete();
                sections.push(finished);
            }
            current = Some(Section::new(caps[1].to_string(), line_no));
            continue;
        }

        if let Some(caps) = SCOPE_LINE.captures(line) {
            if current.is_some() || !sections.is_empty() {
                return Err(parse_err(
                    source,
                    line_no,
                    "Scope must be declared before the first section",
                ));
            }
            let value = &caps[1];
            let parsed = Scope::parse(value)
                .ok_or_else(|| parse_err(source, line_no, format!("Unknown scope '{}'", value)))?;
            if let Some(existing) = scope
                && existing != parsed
            {
                return Err(parse_err(
                    source,
                    line_no,
                    format!("Conflicting scope declarations: '{}' and '{}'", existing, parsed),
                ));
            }
            scope = Some(parsed);
            continue;
        }

        if let Some(section) = current.as_mut() {
            if let Some(caps) = METADATA.captures(line) {
                let value = caps[2].to_string();
                let slot = match &caps[1] {
                    "Category" => &mut section.category,
                    _ => &mut section.severity,
                };
                if slot.replace((value, line_no)).is_some() {
                    return Err(parse_err(
                        source,
                        line_no,
                        format!("Duplicate {} line in section '{}'", &caps[1], section.heading),
                    ));
                }
                continue;
            }
            section.rationale.push(line.to_string());
        }
        // Lines before the first section (title, intro prose) are ignored
    }

    if let Some(open) = &fence {
        return Err(parse_err(source, open.open_line, "Unterminated code fence"));
    }

    if let Some(mut finished) = current.take() {
        finished.complete();
        sections.push(finished);
    }

    Ok((scope, sections))
}

/// Turns a scanned section into a rule, or None for prose sections
fn build_rule(
    mut section: Section,
    scope: Scope,
    source: &Path,
) -> Result<Option<RuleDefinition>, LoadError> {
    if section.category.is_none() && section.severity.is_none() {
        return Ok(None);
    }

    let heading_line = section.heading_line;
    let (category_value, category_line) = section.category.take().ok_or_else(|| {
        parse_err(
            source,
            heading_line,
            format!("Rule section '{}' is missing a Category line", section.heading),
        )
    })?;
    let (severity_value, severity_line) = section.severity.take().ok_or_else(|| {
        parse_err(
            source,
            heading_line,
            format!("Rule section '{}' is missing a Severity line", section.heading),
        )
    })?;

    let id = RuleId::new(section.heading.clone()).ok_or_else(|| {
        parse_err(
            source,
            heading_line,
            format!("Invalid rule id '{}'", section.heading),
        )
    })?;

    let category = Category::new(category_value.to_ascii_lowercase()).ok_or_else(|| {
        parse_err(
            source,
            category_line,
            format!("Invalid category '{}'", category_value),
        )
    })?;

    let severity = Severity::parse(&severity_value).ok_or_else(|| {
        parse_err(
            source,
            severity_line,
            format!(
                "Unknown severity '{}' (expected advisory, required, or disallowed)",
                severity_value
            ),
        )
    })?;

    let rationale = section.rationale.join("\n").trim().to_string();

    let rule = RuleDefinition::new(id, scope, category, severity, rationale)
        .and_then(|rule| rule.with_examples(section.examples))
        .map_err(|e| parse_err(source, heading_line, e.to_string()))?;

    Ok(Some(rule))
}

/// Extracts the example side from a fence info string like "ts bad"
fn parse_side(info: &str) -> Option<Side> {
    let mut side = None;
    for token in info.split_whitespace() {
        if token.eq_ignore_ascii_case("good") {
            side = Some(Side::Good);
        } else if token.eq_ignore_ascii_case("bad") {
            side = Some(Side::Bad);
        }
    }
    side
}

fn parse_err(source: &Path, line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Parse {
        file: source.to_path_buf(),
        line,
        message: message.into(),
    }
}
