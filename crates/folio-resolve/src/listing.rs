//! Sorted listings, filters, lookup, timeline grouping, and search.
//!
//! The canonical listing order is category (lexical, ascending), then
//! `order` (ascending), then `publish_date` (descending). The sort is
//! stable, so records that tie on the full key keep their load order.
//! Drafts never appear in listings but are still reachable through
//! [`find_by_slug`] (validation and navigation operate on the whole
//! collection).

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use folio_content::{Category, NoteRecord, ProjectPreview, ProjectRecord};

/// All published projects in canonical listing order.
pub fn all_projects(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut listed: Vec<&ProjectRecord> = projects.iter().filter(|p| !p.meta.draft).collect();
    listed.sort_by_key(|p| {
        (
            p.meta.category.as_str(),
            p.meta.order,
            Reverse(p.meta.publish_date),
        )
    });
    listed
}

/// Published projects in one category, in canonical order.
pub fn by_category(projects: &[ProjectRecord], category: Category) -> Vec<&ProjectRecord> {
    all_projects(projects)
        .into_iter()
        .filter(|p| p.meta.category == category)
        .collect()
}

/// Published featured projects, in canonical order.
pub fn featured(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    all_projects(projects)
        .into_iter()
        .filter(|p| p.meta.featured)
        .collect()
}

/// First record whose effective slug matches; `None` when absent.
pub fn find_by_slug<'a>(projects: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    projects.iter().find(|p| p.slug() == slug)
}

/// One publish-year bucket of the timeline view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimelineGroup {
    pub year: i32,
    pub projects: Vec<ProjectPreview>,
}

/// Published projects bucketed by publish year, newest year first.
/// Within a year, entries keep canonical listing order.
pub fn timeline(projects: &[ProjectRecord]) -> Vec<TimelineGroup> {
    let mut years: BTreeMap<i32, Vec<ProjectPreview>> = BTreeMap::new();
    for record in all_projects(projects) {
        years
            .entry(record.meta.publish_date.year())
            .or_default()
            .push(ProjectPreview::from(record));
    }

    years
        .into_iter()
        .rev()
        .map(|(year, projects)| TimelineGroup { year, projects })
        .collect()
}

/// Case-insensitive substring search over title, description, tags,
/// technologies, role, and client, returned in canonical listing order.
pub fn search<'a>(projects: &'a [ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
    let needle = query.to_lowercase();
    all_projects(projects)
        .into_iter()
        .filter(|p| haystack(p).contains(&needle))
        .collect()
}

fn haystack(record: &ProjectRecord) -> String {
    let meta = &record.meta;
    let mut text = format!("{} {}", meta.title, meta.description);
    for tag in &meta.tags {
        text.push(' ');
        text.push_str(tag);
    }
    for tech in &meta.technologies {
        text.push(' ');
        text.push_str(tech);
    }
    if let Some(role) = &meta.role {
        text.push(' ');
        text.push_str(role);
    }
    if let Some(client) = &meta.client {
        text.push(' ');
        text.push_str(client);
    }
    text.to_lowercase()
}

// ============================================================================
// Notes
// ============================================================================

/// Published notes, newest first.
pub fn published_notes(notes: &[NoteRecord]) -> Vec<&NoteRecord> {
    let mut listed: Vec<&NoteRecord> = notes.iter().filter(|n| !n.meta.draft).collect();
    listed.sort_by_key(|n| Reverse(n.meta.publish_date));
    listed
}

/// Published featured notes, newest first.
pub fn featured_notes(notes: &[NoteRecord]) -> Vec<&NoteRecord> {
    published_notes(notes)
        .into_iter()
        .filter(|n| n.meta.featured)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
