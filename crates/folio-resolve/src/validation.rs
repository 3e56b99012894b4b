//! Collection-wide relationship validation.
//!
//! Validation reports, never raises: referential problems are collected
//! into a structured result the caller can inspect or assert on. Errors
//! mark the collection invalid; warnings never do. Running validation
//! twice over the same collection yields identical results.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use folio_content::ProjectRecord;

// ============================================================================
// Types
// ============================================================================

/// Result of relationship or routing validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the collection is valid (no errors; warnings don't count).
    pub valid: bool,
    /// Problems that should block publishing.
    pub errors: Vec<ValidationIssue>,
    /// Non-critical findings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error (marks the collection as invalid).
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.valid = false;
        self.errors.push(issue);
    }

    /// Add a warning.
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Total issue count (errors + warnings).
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue type/code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Affected record slugs (if applicable).
    pub slugs: Vec<String>,
}

impl ValidationIssue {
    /// Create a new issue.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            slugs: Vec::new(),
        }
    }

    /// Attach affected record slugs.
    pub fn with_slugs(mut self, slugs: Vec<String>) -> Self {
        self.slugs = slugs;
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate parent/child relationships and per-record requirements
/// across the whole collection, drafts included.
///
/// Checks for:
/// - Duplicate effective slugs
/// - Subprojects without a `parent_project`, or with a dangling one
/// - Parents that are not category-typed
/// - Dangling or non-reciprocal `child_projects` entries
/// - Categories no subproject points at
/// - Missing role/client/timeline metadata
/// - Hero images without alt text
/// - Cycles in parent references
pub fn validate_relationships(projects: &[ProjectRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_duplicate_slugs(projects, &mut result);
    check_parents(projects, &mut result);
    check_children(projects, &mut result);
    check_required_fields(projects, &mut result);
    check_hero_alt(projects, &mut result);
    check_parent_cycles(projects, &mut result);

    result
}

// ============================================================================
// Individual checks
// ============================================================================

/// Effective slugs must be unique; collisions make routing ambiguous.
fn check_duplicate_slugs(projects: &[ProjectRecord], result: &mut ValidationResult) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in projects {
        *counts.entry(record.slug()).or_default() += 1;
    }

    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(slug, _)| slug.to_string())
        .collect();
    duplicates.sort();

    for slug in duplicates {
        result.add_error(
            ValidationIssue::new(
                "DUPLICATE_SLUG",
                format!("slug '{slug}' is used by more than one record"),
            )
            .with_slugs(vec![slug]),
        );
    }
}

/// Every subproject needs an existing, category-typed parent.
fn check_parents(projects: &[ProjectRecord], result: &mut ValidationResult) {
    for record in projects.iter().filter(|p| p.is_subproject()) {
        let slug = record.slug().to_string();
        let Some(parent_slug) = record.meta.parent_project.as_deref() else {
            result.add_error(
                ValidationIssue::new(
                    "MISSING_PARENT_FIELD",
                    format!("subproject '{slug}' has no parent project"),
                )
                .with_slugs(vec![slug]),
            );
            continue;
        };

        let Some(parent) = projects.iter().find(|p| p.slug() == parent_slug) else {
            result.add_error(
                ValidationIssue::new(
                    "DANGLING_PARENT",
                    format!("subproject '{slug}' references missing parent '{parent_slug}'"),
                )
                .with_slugs(vec![slug]),
            );
            continue;
        };

        if !parent.is_category() {
            result.add_warning(
                ValidationIssue::new(
                    "PARENT_NOT_CATEGORY",
                    format!("parent '{parent_slug}' of '{slug}' is not a category record"),
                )
                .with_slugs(vec![slug, parent_slug.to_string()]),
            );
        }
    }
}

/// `child_projects` entries must exist and point back at their parent.
/// Categories nothing points at get a warning.
fn check_children(projects: &[ProjectRecord], result: &mut ValidationResult) {
    for record in projects.iter().filter(|p| p.is_category()) {
        let slug = record.slug();

        for child_slug in &record.meta.child_projects {
            let Some(child) = projects.iter().find(|p| p.slug() == child_slug) else {
                result.add_error(
                    ValidationIssue::new(
                        "DANGLING_CHILD",
                        format!("category '{slug}' lists missing child '{child_slug}'"),
                    )
                    .with_slugs(vec![slug.to_string(), child_slug.clone()]),
                );
                continue;
            };

            if child.meta.parent_project.as_deref() != Some(slug) {
                result.add_warning(
                    ValidationIssue::new(
                        "NON_RECIPROCAL_CHILD",
                        format!("child '{child_slug}' does not reference '{slug}' as its parent"),
                    )
                    .with_slugs(vec![slug.to_string(), child_slug.clone()]),
                );
            }
        }

        let members = projects
            .iter()
            .filter(|p| p.meta.parent_project.as_deref() == Some(slug))
            .count();
        if members == 0 {
            result.add_warning(
                ValidationIssue::new(
                    "EMPTY_CATEGORY",
                    format!("category '{slug}' has no subprojects"),
                )
                .with_slugs(vec![slug.to_string()]),
            );
        }
    }
}

/// Case-study metadata the pages rely on: role, client, and one of
/// timeline/duration.
fn check_required_fields(projects: &[ProjectRecord], result: &mut ValidationResult) {
    for record in projects {
        let slug = record.slug();
        let mut missing: Vec<&str> = Vec::new();

        if record.meta.role.is_none() {
            missing.push("role");
        }
        if record.meta.client.is_none() {
            missing.push("client");
        }
        if record.meta.timeline.is_none() && record.meta.duration.is_none() {
            missing.push("timeline or duration");
        }

        if !missing.is_empty() {
            result.add_error(
                ValidationIssue::new(
                    "MISSING_REQUIRED_FIELD",
                    format!("record '{slug}' is missing: {}", missing.join(", ")),
                )
                .with_slugs(vec![slug.to_string()]),
            );
        }
    }
}

/// A hero image without alt text fails accessibility checks downstream.
fn check_hero_alt(projects: &[ProjectRecord], result: &mut ValidationResult) {
    for record in projects {
        let has_alt = record
            .meta
            .hero_image_alt
            .as_deref()
            .is_some_and(|alt| !alt.trim().is_empty());
        if record.meta.hero_image.is_some() && !has_alt {
            let slug = record.slug().to_string();
            result.add_error(
                ValidationIssue::new(
                    "MISSING_HERO_ALT",
                    format!("record '{slug}' has a hero image but no alt text"),
                )
                .with_slugs(vec![slug]),
            );
        }
    }
}

/// Parent references must not form a cycle.
fn check_parent_cycles(projects: &[ProjectRecord], result: &mut ValidationResult) {
    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for record in projects {
        let idx = graph.add_node(record.slug().to_string());
        indices.insert(record.slug(), idx);
    }

    for record in projects {
        if let Some(parent_slug) = record.meta.parent_project.as_deref() {
            if let (Some(&from), Some(&to)) =
                (indices.get(record.slug()), indices.get(parent_slug))
            {
                graph.add_edge(from, to, ());
            }
        }
    }

    if toposort(&graph, None).is_err() {
        result.add_error(ValidationIssue::new(
            "PARENT_CYCLE",
            "Cycle detected in parent project references",
        ));
    }
}

// ============================================================================
// Tests
// ============================================================================
