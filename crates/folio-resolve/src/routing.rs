//! URL generation and routing validation.
//!
//! URL shapes: `single` → `/work/{slug}`, `category` → `/work/{category}`,
//! `subproject` → `/work/{category}/{slug}`. Filename-derived slugs get a
//! cosmetic cleanup first: a category record named `{category}-overview`
//! collapses to the category name, and a subproject drops a leading
//! `{category}-` prefix unless the remainder would be empty or a generic
//! placeholder. An explicit frontmatter `slug` is used verbatim.

use log::warn;

use crate::validation::{ValidationIssue, ValidationResult};
use folio_content::{ProjectRecord, ProjectType};

/// The URL-facing slug for a record, after prefix cleanup.
pub fn url_slug(record: &ProjectRecord) -> String {
    let slug = record.slug();
    let category = record.meta.category.as_str();

    // an explicit frontmatter slug is authoritative; cleanup only
    // applies to filename-derived slugs
    if record.meta.slug.is_some() {
        return slug.to_string();
    }

    match record.meta.project_type {
        ProjectType::Category if slug == format!("{category}-overview") => category.to_string(),
        ProjectType::Subproject => match slug.strip_prefix(&format!("{category}-")) {
            Some(rest) if !rest.is_empty() && rest != "main" && rest != "overview" => {
                rest.to_string()
            }
            _ => slug.to_string(),
        },
        _ => slug.to_string(),
    }
}

/// The canonical URL for a record.
///
/// A subproject with no `parent_project` reference still gets the
/// subproject URL shape; the inconsistency is logged, not raised.
pub fn project_url(record: &ProjectRecord) -> String {
    let category = record.meta.category.as_str();
    match record.meta.project_type {
        ProjectType::Single => format!("/work/{}", url_slug(record)),
        ProjectType::Category => format!("/work/{category}"),
        ProjectType::Subproject => {
            if record.meta.parent_project.is_none() {
                warn!(
                    "subproject '{}' has no parent project; using category '{}' for its URL",
                    record.slug(),
                    category
                );
            }
            format!("/work/{}/{}", category, url_slug(record))
        }
    }
}

/// Validate the generated routing table for the whole collection.
///
/// Errors: two records generating the same URL. Warnings: a category
/// record no subproject points at.
pub fn validate_routing(projects: &[ProjectRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_duplicate_urls(projects, &mut result);
    check_empty_categories(projects, &mut result);

    result
}

fn check_duplicate_urls(projects: &[ProjectRecord], result: &mut ValidationResult) {
    use std::collections::HashMap;

    let mut by_url: HashMap<String, Vec<String>> = HashMap::new();
    for record in projects {
        by_url
            .entry(project_url(record))
            .or_default()
            .push(record.slug().to_string());
    }

    let mut duplicates: Vec<(String, Vec<String>)> = by_url
        .into_iter()
        .filter(|(_, slugs)| slugs.len() > 1)
        .collect();
    duplicates.sort();

    for (url, slugs) in duplicates {
        result.add_error(
            ValidationIssue::new(
                "DUPLICATE_URL",
                format!("{} record(s) generate the URL {url}", slugs.len()),
            )
            .with_slugs(slugs),
        );
    }
}

fn check_empty_categories(projects: &[ProjectRecord], result: &mut ValidationResult) {
    for record in projects.iter().filter(|p| p.is_category()) {
        let members = projects
            .iter()
            .filter(|p| p.meta.parent_project.as_deref() == Some(record.slug()))
            .count();
        if members == 0 {
            result.add_warning(
                ValidationIssue::new(
                    "EMPTY_CATEGORY",
                    format!("category '{}' has no subprojects", record.slug()),
                )
                .with_slugs(vec![record.slug().to_string()]),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::fixtures;
    use folio_content::{Category, ProjectType};

    // ------------------------------------------------------------------------
    // URL shapes
    // ------------------------------------------------------------------------

    #[test]
    fn test_single_url() {
        let record = fixtures::project("keystrok", Category::Keystrok, ProjectType::Single);
        assert_eq!(project_url(&record), "/work/keystrok");
    }

    #[test]
    fn test_category_url_ignores_slug() {
        let record = fixtures::project("keystrok-overview", Category::Keystrok, ProjectType::Category);
        assert_eq!(project_url(&record), "/work/keystrok");
    }

    #[test]
    fn test_subproject_url() {
        let mut record = fixtures::project("apm", Category::Grafana, ProjectType::Subproject);
        record.meta.parent_project = Some("grafana".into());
        assert_eq!(project_url(&record), "/work/grafana/apm");
    }

    #[test]
    fn test_subproject_without_parent_still_routed() {
        let record = fixtures::project("apm", Category::Grafana, ProjectType::Subproject);
        assert!(record.meta.parent_project.is_none());
        assert_eq!(project_url(&record), "/work/grafana/apm");
    }

    // ------------------------------------------------------------------------
    // Slug cleanup
    // ------------------------------------------------------------------------

    #[test]
    fn test_subproject_strips_category_prefix() {
        let mut record = fixtures::project(
            "grafana-dashboards",
            Category::Grafana,
            ProjectType::Subproject,
        );
        record.meta.parent_project = Some("grafana".into());
        assert_eq!(url_slug(&record), "dashboards");
        assert_eq!(project_url(&record), "/work/grafana/dashboards");
    }

    #[test]
    fn test_subproject_keeps_placeholder_remainders() {
        for slug in ["grafana-main", "grafana-overview"] {
            let record = fixtures::project(slug, Category::Grafana, ProjectType::Subproject);
            assert_eq!(url_slug(&record), slug);
        }
    }

    #[test]
    fn test_explicit_slug_override_not_cleaned() {
        let mut record = fixtures::project("apm", Category::Grafana, ProjectType::Subproject);
        record.meta.parent_project = Some("grafana".into());
        record.meta.slug = Some("grafana-apm".into());

        assert_eq!(url_slug(&record), "grafana-apm");
        assert_eq!(project_url(&record), "/work/grafana/grafana-apm");
    }

    #[test]
    fn test_explicit_overview_slug_kept_on_category() {
        let mut record = fixtures::project("grafana", Category::Grafana, ProjectType::Category);
        record.meta.slug = Some("grafana-overview".into());
        assert_eq!(url_slug(&record), "grafana-overview");
    }

    #[test]
    fn test_category_overview_slug_collapses() {
        let record =
            fixtures::project("grafana-overview", Category::Grafana, ProjectType::Category);
        assert_eq!(url_slug(&record), "grafana");
    }

    #[test]
    fn test_single_slug_untouched() {
        let record = fixtures::project("keystrok-redesign", Category::Keystrok, ProjectType::Single);
        assert_eq!(url_slug(&record), "keystrok-redesign");
    }

    // ------------------------------------------------------------------------
    // Routing validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_duplicate_urls_reported() {
        let a = fixtures::project("tool", Category::Opensource, ProjectType::Single);
        let b = fixtures::project("tool", Category::Opensource, ProjectType::Single);

        let result = validate_routing(&[a, b]);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.code == "DUPLICATE_URL"));
    }

    #[test]
    fn test_empty_category_warned() {
        let category = fixtures::project("grafana", Category::Grafana, ProjectType::Category);
        let result = validate_routing(&[category]);

        assert!(result.valid); // warning only
        assert!(result.warnings.iter().any(|w| w.code == "EMPTY_CATEGORY"));
    }

    #[test]
    fn test_populated_routing_clean() {
        let mut category = fixtures::project("grafana", Category::Grafana, ProjectType::Category);
        category.meta.child_projects = vec!["apm".into()];
        let mut sub = fixtures::project("apm", Category::Grafana, ProjectType::Subproject);
        sub.meta.parent_project = Some("grafana".into());

        let result = validate_routing(&[category, sub]);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }
}
