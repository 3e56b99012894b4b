//! In-memory record fixtures for tests.
//!
//! Available to downstream crates via the `test-utils` feature. The
//! returned records are valid under relationship validation; tests mutate
//! fields directly to provoke specific failures.

use chrono::NaiveDate;

use crate::types::{
    Category, DEFAULT_ORDER, NoteMeta, NoteRecord, ProjectMeta, ProjectRecord, ProjectType,
};

/// Build a minimal, validation-clean project record.
///
/// The effective slug equals `file_slug`; title is the slug verbatim.
pub fn project(file_slug: &str, category: Category, project_type: ProjectType) -> ProjectRecord {
    ProjectRecord {
        file_slug: file_slug.to_string(),
        meta: ProjectMeta {
            title: file_slug.to_string(),
            description: format!("{file_slug} description"),
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            tags: Vec::new(),
            featured: false,
            draft: false,
            category,
            project_type,
            parent_project: None,
            child_projects: Vec::new(),
            order: DEFAULT_ORDER,
            slug: None,
            hero_image: None,
            hero_image_alt: None,
            thumbnail: None,
            color: None,
            role: Some("Designer".to_string()),
            client: Some("Client".to_string()),
            timeline: Some("2024".to_string()),
            duration: None,
            technologies: Vec::new(),
            methodology: None,
        },
        body: String::new(),
    }
}

/// Build a minimal note record.
pub fn note(file_slug: &str) -> NoteRecord {
    NoteRecord {
        file_slug: file_slug.to_string(),
        meta: NoteMeta {
            title: file_slug.to_string(),
            description: format!("{file_slug} note"),
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            tags: Vec::new(),
            draft: false,
            featured: false,
        },
        body: String::new(),
    }
}
