//! Filesystem discovery and record loading.
//!
//! Collections live in a directory of `*.md` / `*.mdx` files. Loading is
//! synchronous and happens once per build; a schema violation in any file
//! aborts the load with an error naming that file.

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{Error, Result, slug_from_path};
use log::debug;
use serde::de::DeserializeOwned;

use crate::frontmatter;
use crate::types::{NoteMeta, NoteRecord, ProjectMeta, ProjectRecord};

/// Discover content files (`.md` and `.mdx`) under `dir`, recursively.
///
/// Paths are returned sorted so load order (and therefore stable-sort
/// tie-breaking downstream) is deterministic.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for ext in ["md", "mdx"] {
        let pattern = format!("{}/**/*.{}", dir.display(), ext);
        let entries =
            glob::glob(&pattern).map_err(|e| Error::config(format!("bad glob pattern: {e}")))?;
        for entry in entries {
            let path = entry.map_err(|e| Error::invalid_data(e.to_string()))?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}

/// Load all project records from a content directory.
pub fn load_projects(dir: &Path) -> Result<Vec<ProjectRecord>> {
    let records = load_collection(dir, |slug, meta: ProjectMeta, body| ProjectRecord {
        file_slug: slug,
        meta,
        body,
    })?;
    debug!("loaded {} project record(s) from {}", records.len(), dir.display());
    Ok(records)
}

/// Load all note records from a content directory.
pub fn load_notes(dir: &Path) -> Result<Vec<NoteRecord>> {
    let records = load_collection(dir, |slug, meta: NoteMeta, body| NoteRecord {
        file_slug: slug,
        meta,
        body,
    })?;
    debug!("loaded {} note record(s) from {}", records.len(), dir.display());
    Ok(records)
}

/// Load and parse every file in a collection directory.
fn load_collection<M, R>(dir: &Path, build: impl Fn(String, M, String) -> R) -> Result<Vec<R>>
where
    M: DeserializeOwned,
{
    let mut records = Vec::new();

    for path in discover_files(dir)? {
        let source = fs::read_to_string(&path)?;
        let (meta, body) = frontmatter::parse_meta::<M>(&source)
            .map_err(|e| Error::invalid_data(format!("{}: {e}", path.display())))?;
        let slug = slug_from_path(&path)
            .ok_or_else(|| Error::invalid_data(format!("{}: unusable filename", path.display())))?;
        records.push(build(slug, meta, body));
    }

    Ok(records)
}
