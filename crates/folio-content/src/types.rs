//! Record types for the site's content collections.
//!
//! A [`ProjectRecord`] is one portfolio entry: frontmatter metadata plus
//! the markdown body. [`NoteRecord`] is the blog-style equivalent. Both
//! are created once at load time and never mutated afterwards; every
//! derived view (navigation, previews, listings) is recomputed from the
//! immutable collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel sort order for records that do not specify one.
pub const DEFAULT_ORDER: i32 = 999;

// ============================================================================
// Enums
// ============================================================================

/// Project category (closed set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keystrok,
    Grafana,
    Opensource,
    Jungleai,
    Notes,
}

impl Category {
    /// The lowercase name used in URLs and frontmatter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keystrok => "keystrok",
            Category::Grafana => "grafana",
            Category::Opensource => "opensource",
            Category::Jungleai => "jungleai",
            Category::Notes => "notes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a project participates in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Standalone case study.
    Single,
    /// Grouping record with child subprojects.
    Category,
    /// Member of exactly one category project.
    Subproject,
}

/// Primary methodology used on a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Methodology {
    Agile,
    DesignThinking,
    LeanUx,
    Waterfall,
}

// ============================================================================
// Project records
// ============================================================================

/// Frontmatter metadata for a project.
///
/// Required fields fail deserialization (and therefore the load) when
/// absent; cross-field requirements such as role/client/timeline or hero
/// alt text are soft checks performed by relationship validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,

    pub category: Category,
    pub project_type: ProjectType,
    /// Parent slug, required for subprojects (validated, not enforced here).
    #[serde(default)]
    pub parent_project: Option<String>,
    /// Child slugs, expected for category projects.
    #[serde(default)]
    pub child_projects: Vec<String>,
    #[serde(default = "default_order")]
    pub order: i32,
    /// Explicit slug override; the filename-derived slug is used otherwise.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub hero_image_alt: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub methodology: Option<Methodology>,
}

fn default_order() -> i32 {
    DEFAULT_ORDER
}

/// A loaded project: filename-derived slug, metadata, and markdown body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Slug derived from the source filename.
    pub file_slug: String,
    /// Parsed frontmatter.
    pub meta: ProjectMeta,
    /// Markdown body (after frontmatter).
    pub body: String,
}

impl ProjectRecord {
    /// Effective slug: the explicit frontmatter override, else the
    /// filename-derived slug.
    pub fn slug(&self) -> &str {
        self.meta.slug.as_deref().unwrap_or(&self.file_slug)
    }

    pub fn is_category(&self) -> bool {
        self.meta.project_type == ProjectType::Category
    }

    pub fn is_subproject(&self) -> bool {
        self.meta.project_type == ProjectType::Subproject
    }

    /// Timeline for display: `timeline`, falling back to `duration`,
    /// falling back to `"Unknown"`.
    pub fn display_timeline(&self) -> &str {
        self.meta
            .timeline
            .as_deref()
            .or(self.meta.duration.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Reduced-field projection of a project for list/card display.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectPreview {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub project_type: ProjectType,
    pub thumbnail: Option<String>,
    pub color: Option<String>,
    pub role: String,
    pub timeline: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub order: i32,
}

impl From<&ProjectRecord> for ProjectPreview {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            slug: record.slug().to_string(),
            title: record.meta.title.clone(),
            description: record.meta.description.clone(),
            category: record.meta.category,
            project_type: record.meta.project_type,
            thumbnail: record.meta.thumbnail.clone(),
            color: record.meta.color.clone(),
            role: record.meta.role.clone().unwrap_or_default(),
            timeline: record.display_timeline().to_string(),
            tags: record.meta.tags.clone(),
            featured: record.meta.featured,
            order: record.meta.order,
        }
    }
}

// ============================================================================
// Note records
// ============================================================================

/// Frontmatter metadata for a note.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMeta {
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub featured: bool,
}

/// A loaded note: filename-derived slug, metadata, and markdown body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteRecord {
    pub file_slug: String,
    pub meta: NoteMeta,
    pub body: String,
}

impl NoteRecord {
    /// Notes have no slug override; identity is the filename slug.
    pub fn slug(&self) -> &str {
        &self.file_slug
    }
}

// ============================================================================
// Tests
// ============================================================================
