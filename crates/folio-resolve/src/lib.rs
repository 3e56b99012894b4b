//! Derived query views over the static project collection.
//!
//! # Modules
//!
//! - [`listing`]: Sorted listings, filters, lookup, timeline, search
//! - [`navigation`]: Parent/child/sibling navigation and breadcrumbs
//! - [`related`]: Related-project scoring
//! - [`routing`]: URL generation and routing validation
//! - [`validation`]: Collection-wide relationship validation

#![doc = include_str!("../README.md")]

pub mod listing;
pub mod navigation;
pub mod related;
pub mod routing;
pub mod validation;

pub use listing::{
    TimelineGroup, all_projects, by_category, featured, featured_notes, find_by_slug,
    published_notes, search, timeline,
};
pub use navigation::{Breadcrumb, ProjectNavigation, project_navigation};
pub use related::{DEFAULT_RELATED_LIMIT, related_projects, relatedness};
pub use routing::{project_url, url_slug, validate_routing};
pub use validation::{ValidationIssue, ValidationResult, validate_relationships};
