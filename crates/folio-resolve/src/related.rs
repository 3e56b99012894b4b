//! Related-project scoring.
//!
//! Relatedness between two records: +3 for the same category, +1 per
//! shared tag, +1 for the same declared methodology. Candidates scoring
//! zero are dropped; the rest are sorted by score descending (stable
//! against canonical listing order) and truncated to the caller's limit.

use std::cmp::Reverse;

use crate::listing::all_projects;
use folio_content::{ProjectPreview, ProjectRecord};

/// Default number of related projects returned.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Score how related `candidate` is to `target`.
pub fn relatedness(target: &ProjectRecord, candidate: &ProjectRecord) -> u32 {
    let mut score = 0;

    if target.meta.category == candidate.meta.category {
        score += 3;
    }

    // multiset intersection: each candidate tag matches at most once
    let mut remaining: Vec<&str> = candidate.meta.tags.iter().map(String::as_str).collect();
    for tag in &target.meta.tags {
        if let Some(position) = remaining.iter().position(|t| t == tag) {
            remaining.swap_remove(position);
            score += 1;
        }
    }

    if let (Some(a), Some(b)) = (target.meta.methodology, candidate.meta.methodology) {
        if a == b {
            score += 1;
        }
    }

    score
}

/// Published projects related to the record with the given slug, best
/// first, truncated to `limit` (default [`DEFAULT_RELATED_LIMIT`]).
///
/// An unknown slug yields an empty list.
pub fn related_projects(
    projects: &[ProjectRecord],
    slug: &str,
    limit: Option<usize>,
) -> Vec<ProjectPreview> {
    let Some(target) = projects.iter().find(|p| p.slug() == slug) else {
        return Vec::new();
    };
    let limit = limit.unwrap_or(DEFAULT_RELATED_LIMIT);

    let mut scored: Vec<(u32, &ProjectRecord)> = all_projects(projects)
        .into_iter()
        .filter(|p| p.slug() != slug)
        .map(|p| (relatedness(target, p), p))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, record)| ProjectPreview::from(record))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
