//! Parent/child/sibling navigation and breadcrumbs.
//!
//! Navigation is resolved per slug from the full collection. An unknown
//! slug yields `None`; everything else degrades gracefully (a dangling
//! parent reference simply produces no parent entry — validation is
//! where that gets reported).

use serde::{Deserialize, Serialize};

use crate::listing::find_by_slug;
use crate::routing::project_url;
use folio_content::{ProjectPreview, ProjectRecord};

/// One entry in a breadcrumb chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
}

/// Resolved navigation context for one project page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectNavigation {
    pub current: ProjectPreview,
    /// Parent preview; subprojects only.
    pub parent: Option<ProjectPreview>,
    /// Member subprojects, by `order` ascending; category records only.
    pub children: Vec<ProjectPreview>,
    /// Previous sibling by `order`; subprojects only, absent at the boundary.
    pub prev: Option<ProjectPreview>,
    /// Next sibling by `order`; subprojects only, absent at the boundary.
    pub next: Option<ProjectPreview>,
    /// Home → [parent] → current.
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Resolve navigation for the record with the given effective slug.
pub fn project_navigation(projects: &[ProjectRecord], slug: &str) -> Option<ProjectNavigation> {
    let current = find_by_slug(projects, slug)?;

    let parent = current
        .meta
        .parent_project
        .as_deref()
        .filter(|_| current.is_subproject())
        .and_then(|parent_slug| find_by_slug(projects, parent_slug));

    let children = if current.is_category() {
        members_of(projects, current.slug())
            .into_iter()
            .map(ProjectPreview::from)
            .collect()
    } else {
        Vec::new()
    };

    let (prev, next) = match (&current.meta.parent_project, current.is_subproject()) {
        (Some(parent_slug), true) => siblings(projects, parent_slug, current.slug()),
        _ => (None, None),
    };

    let mut breadcrumbs = vec![Breadcrumb {
        label: "Home".to_string(),
        url: "/".to_string(),
    }];
    if let Some(parent) = parent {
        breadcrumbs.push(Breadcrumb {
            label: parent.meta.title.clone(),
            url: project_url(parent),
        });
    }
    breadcrumbs.push(Breadcrumb {
        label: current.meta.title.clone(),
        url: project_url(current),
    });

    Some(ProjectNavigation {
        current: ProjectPreview::from(current),
        parent: parent.map(ProjectPreview::from),
        children,
        prev,
        next,
        breadcrumbs,
    })
}

/// Records whose `parent_project` is the given slug, by `order` ascending.
fn members_of<'a>(projects: &'a [ProjectRecord], parent_slug: &str) -> Vec<&'a ProjectRecord> {
    let mut members: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|p| p.meta.parent_project.as_deref() == Some(parent_slug))
        .collect();
    members.sort_by_key(|p| p.meta.order);
    members
}

/// Positional prev/next among same-parent siblings, ordered by `order`.
fn siblings(
    projects: &[ProjectRecord],
    parent_slug: &str,
    current_slug: &str,
) -> (Option<ProjectPreview>, Option<ProjectPreview>) {
    let members = members_of(projects, parent_slug);
    let Some(position) = members.iter().position(|p| p.slug() == current_slug) else {
        return (None, None);
    };

    let prev = position
        .checked_sub(1)
        .map(|i| ProjectPreview::from(members[i]));
    let next = members.get(position + 1).map(|p| ProjectPreview::from(*p));
    (prev, next)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::fixtures;
    use folio_content::{Category, ProjectType};

    fn grafana_family() -> Vec<ProjectRecord> {
        let mut category = fixtures::project("grafana", Category::Grafana, ProjectType::Category);
        category.meta.title = "Grafana".into();
        category.meta.child_projects = vec!["apm".into(), "dashboards".into(), "alerts".into()];

        let mut apm = fixtures::project("apm", Category::Grafana, ProjectType::Subproject);
        apm.meta.title = "APM".into();
        apm.meta.parent_project = Some("grafana".into());
        apm.meta.order = 2;

        let mut dashboards =
            fixtures::project("dashboards", Category::Grafana, ProjectType::Subproject);
        dashboards.meta.parent_project = Some("grafana".into());
        dashboards.meta.order = 1;

        let mut alerts = fixtures::project("alerts", Category::Grafana, ProjectType::Subproject);
        alerts.meta.parent_project = Some("grafana".into());
        alerts.meta.order = 3;

        vec![category, apm, dashboards, alerts]
    }

    #[test]
    fn test_unknown_slug_yields_none() {
        let projects = grafana_family();
        assert!(project_navigation(&projects, "missing").is_none());
    }

    // ------------------------------------------------------------------------
    // Parent and children
    // ------------------------------------------------------------------------

    #[test]
    fn test_subproject_parent_resolved() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "apm").unwrap();

        let parent = nav.parent.unwrap();
        assert_eq!(parent.slug, "grafana");
        assert_eq!(parent.title, "Grafana");
    }

    #[test]
    fn test_dangling_parent_degrades_to_none() {
        let mut projects = grafana_family();
        projects[1].meta.parent_project = Some("ghost".into());

        let nav = project_navigation(&projects, "apm").unwrap();
        assert!(nav.parent.is_none());
        // breadcrumb chain skips the unresolvable parent
        assert_eq!(nav.breadcrumbs.len(), 2);
    }

    #[test]
    fn test_category_children_sorted_by_order() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "grafana").unwrap();

        let slugs: Vec<&str> = nav.children.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dashboards", "apm", "alerts"]);
        assert!(nav.parent.is_none());
        assert!(nav.prev.is_none() && nav.next.is_none());
    }

    #[test]
    fn test_children_follow_parent_references_not_child_list() {
        let mut projects = grafana_family();
        // stale child list entry doesn't surface in navigation
        projects[0].meta.child_projects.push("ghost".into());

        let nav = project_navigation(&projects, "grafana").unwrap();
        assert_eq!(nav.children.len(), 3);
    }

    // ------------------------------------------------------------------------
    // Siblings
    // ------------------------------------------------------------------------

    #[test]
    fn test_middle_sibling_has_both_neighbors() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "apm").unwrap();

        assert_eq!(nav.prev.unwrap().slug, "dashboards");
        assert_eq!(nav.next.unwrap().slug, "alerts");
    }

    #[test]
    fn test_first_sibling_has_no_prev() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "dashboards").unwrap();

        assert!(nav.prev.is_none());
        assert_eq!(nav.next.unwrap().slug, "apm");
    }

    #[test]
    fn test_last_sibling_has_no_next() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "alerts").unwrap();

        assert_eq!(nav.prev.unwrap().slug, "apm");
        assert!(nav.next.is_none());
    }

    #[test]
    fn test_single_has_no_siblings() {
        let projects = vec![fixtures::project(
            "keystrok",
            Category::Keystrok,
            ProjectType::Single,
        )];
        let nav = project_navigation(&projects, "keystrok").unwrap();

        assert!(nav.parent.is_none());
        assert!(nav.children.is_empty());
        assert!(nav.prev.is_none() && nav.next.is_none());
    }

    // ------------------------------------------------------------------------
    // Breadcrumbs
    // ------------------------------------------------------------------------

    #[test]
    fn test_subproject_breadcrumb_chain() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "apm").unwrap();

        assert_eq!(
            nav.breadcrumbs,
            vec![
                Breadcrumb {
                    label: "Home".into(),
                    url: "/".into()
                },
                Breadcrumb {
                    label: "Grafana".into(),
                    url: "/work/grafana".into()
                },
                Breadcrumb {
                    label: "APM".into(),
                    url: "/work/grafana/apm".into()
                },
            ]
        );
    }

    #[test]
    fn test_top_level_breadcrumb_chain() {
        let projects = grafana_family();
        let nav = project_navigation(&projects, "grafana").unwrap();

        let labels: Vec<&str> = nav.breadcrumbs.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Grafana"]);
    }
}
